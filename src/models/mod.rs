// ABOUTME: Core data models for workouts, achievements, and tracking entities
// ABOUTME: Re-exports the model types from their per-domain submodules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

//! Data models shared across services and the achievement engine.

mod achievement;
mod tracking;
mod workout;

pub use achievement::{
    Achievement, AchievementCriteria, AchievementDefinition, AchievementIcon, AchievementRecord,
};
pub use tracking::{
    ActivityLogEntry, GoalStatus, ScheduleSlot, Theme, TrainingGoal, UnitSystem, UserPreferences,
    WeightEntry,
};
pub use workout::{Intensity, WorkoutSession};
