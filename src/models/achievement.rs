// ABOUTME: Achievement models - criteria union, definitions, records, and views
// ABOUTME: Criteria are a closed tagged union; unknown kinds evaluate as inert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rule describing when an achievement is earned
///
/// Thresholds are positive by construction in the shipped catalog. The union
/// is `non_exhaustive` so new criterion kinds can ship in the catalog before
/// their evaluator exists; the engine treats any kind it does not yet score
/// the same way it treats [`AchievementCriteria::Streak`] - never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum AchievementCriteria {
    /// Total number of logged sessions reaches the threshold
    Count {
        /// Sessions required
        threshold: u32,
    },
    /// Any single session lasts at least the threshold
    SingleSessionDuration {
        /// Minutes required within one session
        threshold_minutes: f64,
    },
    /// Minutes across all sessions sum to at least the threshold
    CumulativeDuration {
        /// Total minutes required
        threshold_minutes: f64,
    },
    /// Consecutive training days; reserved, not yet scored
    Streak {
        /// Consecutive days required
        threshold_days: u32,
    },
}

/// Symbolic icon name for presentation; the engine never interprets these
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementIcon {
    /// Trophy cup
    Trophy,
    /// Medal on a ribbon
    Medal,
    /// Five-pointed star
    Star,
    /// Flame
    Flame,
    /// Stopwatch
    Stopwatch,
    /// Calendar page
    Calendar,
    /// Dumbbell
    Dumbbell,
    /// Mountain peak
    Mountain,
}

/// Static description of one milestone in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementDefinition {
    /// Unique key, stable across releases
    pub id: String,
    /// Display title
    pub title: String,
    /// Display description
    pub description: String,
    /// Presentation icon
    pub icon: AchievementIcon,
    /// Rule that earns the achievement
    pub criteria: AchievementCriteria,
}

/// Persisted per-user evaluation result for one definition
///
/// Once `achieved` is stored as true it never reverts, even if the underlying
/// workout history is later mutated or deleted. `progress` is refreshed on
/// every evaluation pass and may move in either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementRecord {
    /// Definition id this record belongs to
    pub id: String,
    /// Display title, denormalized for direct rendering
    pub title: String,
    /// Display description
    pub description: String,
    /// Presentation icon
    pub icon: AchievementIcon,
    /// Rule the record was evaluated against
    pub criteria: AchievementCriteria,
    /// Whether the milestone has been earned
    pub achieved: bool,
    /// Date the milestone was first earned
    pub achieved_date: Option<NaiveDate>,
    /// Percent of the threshold currently satisfied, capped at 100
    pub progress: u8,
}

/// Caller-facing achievement view, ordered the same as the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    /// Definition id
    pub id: String,
    /// Display title
    pub title: String,
    /// Display description
    pub description: String,
    /// Presentation icon
    pub icon: AchievementIcon,
    /// Rule that earns the achievement
    pub criteria: AchievementCriteria,
    /// Whether the milestone has been earned
    pub achieved: bool,
    /// Date the milestone was first earned
    pub achieved_date: Option<NaiveDate>,
    /// Percent of the threshold currently satisfied, capped at 100
    pub progress: u8,
}

impl From<&Achievement> for AchievementRecord {
    fn from(view: &Achievement) -> Self {
        Self {
            id: view.id.clone(),
            title: view.title.clone(),
            description: view.description.clone(),
            icon: view.icon,
            criteria: view.criteria.clone(),
            achieved: view.achieved,
            achieved_date: view.achieved_date,
            progress: view.progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_serialize_with_kind_tag() {
        let criteria = AchievementCriteria::Count { threshold: 10 };
        let json = serde_json::to_value(&criteria).unwrap();
        assert_eq!(json["kind"], "count");
        assert_eq!(json["threshold"], 10);

        let duration = AchievementCriteria::SingleSessionDuration {
            threshold_minutes: 60.0,
        };
        let json = serde_json::to_value(&duration).unwrap();
        assert_eq!(json["kind"], "single_session_duration");
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = AchievementRecord {
            id: "ten-workouts".into(),
            title: "Ten Down".into(),
            description: "Log ten workouts".into(),
            icon: AchievementIcon::Trophy,
            criteria: AchievementCriteria::Count { threshold: 10 },
            achieved: true,
            achieved_date: NaiveDate::from_ymd_opt(2025, 3, 14),
            progress: 100,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: AchievementRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
