// ABOUTME: Workout session model supplied by callers to the achievement engine
// ABOUTME: Calendar-dated sessions with duration, intensity, and calorie metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Subjective effort level for a logged workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Easy effort, conversational pace
    Light,
    /// Sustained effort with elevated heart rate
    Moderate,
    /// Hard effort near the user's limit
    Vigorous,
}

/// A single logged workout session
///
/// Sessions arrive from the caller already fetched; the achievement engine
/// never queries them itself. Fields are tolerant of partial data: a missing
/// date sorts before all dated sessions and a missing duration counts as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Unique identifier for the session
    pub id: String,
    /// Calendar date of the workout; time of day carries no significance
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Duration of the session in minutes
    #[serde(default)]
    pub duration_minutes: f64,
    /// Exercise or activity name
    #[serde(default)]
    pub exercise: Option<String>,
    /// Subjective effort level
    #[serde(default)]
    pub intensity: Option<Intensity>,
    /// Estimated energy expenditure in kilocalories
    #[serde(default)]
    pub calories: Option<f64>,
}

impl WorkoutSession {
    /// Create a session with the fields the achievement engine reads
    #[must_use]
    pub fn new(id: impl Into<String>, date: Option<NaiveDate>, duration_minutes: f64) -> Self {
        Self {
            id: id.into(),
            date,
            duration_minutes,
            exercise: None,
            intensity: None,
            calories: None,
        }
    }

    /// Duration with malformed values normalized to zero
    ///
    /// Negative and non-finite durations are treated as absent rather than
    /// rejected, so a corrupt session can never fail an evaluation pass.
    #[must_use]
    pub fn sanitized_duration(&self) -> f64 {
        if self.duration_minutes.is_finite() && self.duration_minutes > 0.0 {
            self.duration_minutes
        } else {
            0.0
        }
    }
}
