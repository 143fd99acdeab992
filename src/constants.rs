// ABOUTME: System-wide constants and validation limits for stridelog
// ABOUTME: Service identity, entity validation bounds, and catalog thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

//! Named constants used across the library. Validation limits live here so
//! services and tests agree on a single source of truth.

/// Service identity strings used in logs
pub mod service_names {
    /// Canonical service name for structured logging
    pub const STRIDELOG_CORE: &str = "stridelog-core";
}

/// Validation bounds for user-supplied entity fields
pub mod limits {
    /// Lowest plausible body weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 20.0;
    /// Highest plausible body weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 400.0;
    /// Maximum length of a free-form note on a weight entry
    pub const MAX_NOTE_CHARS: usize = 500;

    /// Maximum length of a goal title
    pub const MAX_GOAL_TITLE_CHARS: usize = 120;
    /// Minimum target training sessions per week
    pub const MIN_SESSIONS_PER_WEEK: u32 = 1;
    /// Maximum target training sessions per week
    pub const MAX_SESSIONS_PER_WEEK: u32 = 14;

    /// Shortest schedulable session in minutes
    pub const MIN_SLOT_MINUTES: f64 = 5.0;
    /// Longest schedulable session in minutes
    pub const MAX_SLOT_MINUTES: f64 = 600.0;
}

/// Thresholds for the default achievement catalog
pub mod catalog_thresholds {
    /// Sessions needed for the first-workout achievement
    pub const FIRST_WORKOUT_SESSIONS: u32 = 1;
    /// Sessions needed for the ten-workouts achievement
    pub const TEN_WORKOUT_SESSIONS: u32 = 10;
    /// Sessions needed for the fifty-workouts achievement
    pub const FIFTY_WORKOUT_SESSIONS: u32 = 50;
    /// Single-session minutes for the hour-long-session achievement
    pub const HOUR_SESSION_MINUTES: f64 = 60.0;
    /// Single-session minutes for the extended-session achievement
    pub const EXTENDED_SESSION_MINUTES: f64 = 90.0;
    /// Cumulative minutes for the five-hundred-minutes achievement
    pub const FIVE_HUNDRED_TOTAL_MINUTES: f64 = 500.0;
    /// Cumulative minutes for the thousand-minutes achievement
    pub const THOUSAND_TOTAL_MINUTES: f64 = 1000.0;
    /// Consecutive days for the weekly streak achievement
    pub const WEEK_STREAK_DAYS: u32 = 7;
}

/// Progress percentage bounds
pub mod progress {
    /// Progress value representing a fully met criterion
    pub const COMPLETE: u8 = 100;
}
