// ABOUTME: Static achievement catalog with the default definitions
// ABOUTME: Immutable, injectable at engine construction; OnceLock-backed default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

use std::sync::{Arc, OnceLock};

use crate::constants::catalog_thresholds::{
    EXTENDED_SESSION_MINUTES, FIFTY_WORKOUT_SESSIONS, FIRST_WORKOUT_SESSIONS,
    FIVE_HUNDRED_TOTAL_MINUTES, HOUR_SESSION_MINUTES, TEN_WORKOUT_SESSIONS,
    THOUSAND_TOTAL_MINUTES, WEEK_STREAK_DAYS,
};
use crate::models::{AchievementCriteria, AchievementDefinition, AchievementIcon};

static DEFAULT_CATALOG: OnceLock<AchievementCatalog> = OnceLock::new();

/// Immutable, ordered collection of achievement definitions
///
/// The catalog is a value injected into the engine at construction, not a
/// hidden global: tests and future tenants can supply their own. The default
/// catalog is process-wide and built once.
#[derive(Debug, Clone)]
pub struct AchievementCatalog {
    definitions: Arc<[AchievementDefinition]>,
}

impl AchievementCatalog {
    /// Build a catalog from explicit definitions, preserving their order
    #[must_use]
    pub fn custom(definitions: Vec<AchievementDefinition>) -> Self {
        Self {
            definitions: definitions.into(),
        }
    }

    /// The process-wide default catalog
    pub fn global() -> &'static Self {
        DEFAULT_CATALOG.get_or_init(|| Self::custom(default_definitions()))
    }

    /// Definitions in catalog order
    #[must_use]
    pub fn definitions(&self) -> &[AchievementDefinition] {
        &self.definitions
    }

    /// Number of definitions in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn definition(
    id: &str,
    title: &str,
    description: &str,
    icon: AchievementIcon,
    criteria: AchievementCriteria,
) -> AchievementDefinition {
    AchievementDefinition {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        icon,
        criteria,
    }
}

fn default_definitions() -> Vec<AchievementDefinition> {
    vec![
        definition(
            "first-workout",
            "First Steps",
            "Log your first workout",
            AchievementIcon::Star,
            AchievementCriteria::Count {
                threshold: FIRST_WORKOUT_SESSIONS,
            },
        ),
        definition(
            "ten-workouts",
            "Ten Down",
            "Log ten workouts",
            AchievementIcon::Medal,
            AchievementCriteria::Count {
                threshold: TEN_WORKOUT_SESSIONS,
            },
        ),
        definition(
            "fifty-workouts",
            "Half Century",
            "Log fifty workouts",
            AchievementIcon::Trophy,
            AchievementCriteria::Count {
                threshold: FIFTY_WORKOUT_SESSIONS,
            },
        ),
        definition(
            "hour-session",
            "Hour of Power",
            "Complete a workout lasting a full hour",
            AchievementIcon::Stopwatch,
            AchievementCriteria::SingleSessionDuration {
                threshold_minutes: HOUR_SESSION_MINUTES,
            },
        ),
        definition(
            "extended-session",
            "The Long Haul",
            "Complete a single ninety-minute workout",
            AchievementIcon::Mountain,
            AchievementCriteria::SingleSessionDuration {
                threshold_minutes: EXTENDED_SESSION_MINUTES,
            },
        ),
        definition(
            "five-hundred-minutes",
            "Five Hundred Club",
            "Accumulate five hundred minutes of training",
            AchievementIcon::Dumbbell,
            AchievementCriteria::CumulativeDuration {
                threshold_minutes: FIVE_HUNDRED_TOTAL_MINUTES,
            },
        ),
        definition(
            "thousand-minutes",
            "Thousand Minute Mark",
            "Accumulate one thousand minutes of training",
            AchievementIcon::Flame,
            AchievementCriteria::CumulativeDuration {
                threshold_minutes: THOUSAND_TOTAL_MINUTES,
            },
        ),
        definition(
            "week-streak",
            "Week Warrior",
            "Train seven days in a row",
            AchievementIcon::Calendar,
            AchievementCriteria::Streak {
                threshold_days: WEEK_STREAK_DAYS,
            },
        ),
    ]
}
