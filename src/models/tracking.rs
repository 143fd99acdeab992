// ABOUTME: Tracking entity models - weight entries, goals, schedule, preferences
// ABOUTME: Thin CRUD payloads with no derived computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// A single body-weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Unique identifier
    pub id: String,
    /// Calendar date of the measurement
    pub date: NaiveDate,
    /// Body weight in kilograms; conversion to display units is the caller's concern
    pub weight_kg: f64,
    /// Optional free-form note
    #[serde(default)]
    pub note: Option<String>,
}

/// Lifecycle state of a training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Goal is being pursued
    Active,
    /// Goal was met
    Completed,
    /// Goal was given up
    Abandoned,
}

/// A user-defined training goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingGoal {
    /// Unique identifier
    pub id: String,
    /// Short display title
    pub title: String,
    /// Target number of training sessions per week
    pub target_sessions_per_week: u32,
    /// Optional date the goal should be met by
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    /// Lifecycle state
    pub status: GoalStatus,
    /// When the goal was created
    pub created_at: DateTime<Utc>,
}

/// One planned workout in the weekly schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    /// Unique identifier
    pub id: String,
    /// Day of week the slot repeats on
    pub day: Weekday,
    /// Exercise or activity name
    pub exercise: String,
    /// Planned duration in minutes
    pub duration_minutes: f64,
}

/// Measurement system for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Kilograms and kilometres
    Metric,
    /// Pounds and miles
    Imperial,
}

/// UI color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// Follow the platform setting
    System,
}

/// Per-user display preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Measurement system for display
    pub units: UnitSystem,
    /// UI color theme
    pub theme: Theme,
    /// First day shown in the weekly schedule
    pub week_starts_on: Weekday,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            units: UnitSystem::Metric,
            theme: Theme::System,
            week_starts_on: Weekday::Mon,
        }
    }
}

/// Best-effort audit record of a service-level action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    /// User the action was performed for
    pub user_id: String,
    /// Action name, e.g. `weight.create`
    pub action: String,
    /// Human-readable detail
    pub detail: String,
    /// When the action happened
    pub at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_default_to_metric_monday() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.units, UnitSystem::Metric);
        assert_eq!(prefs.theme, Theme::System);
        assert_eq!(prefs.week_starts_on, Weekday::Mon);
    }

    #[test]
    fn goal_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&GoalStatus::Active).unwrap(),
            "\"active\""
        );
    }
}
