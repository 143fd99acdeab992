// ABOUTME: Achievement evaluation - catalog, per-criterion scoring, and engine
// ABOUTME: Computes achieved state and progress, reconciled with stored records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

//! # Achievement Evaluation
//!
//! Given the static catalog of [`crate::models::AchievementDefinition`]s and a
//! user's workout history, the engine computes per-definition achieved state,
//! first-achieved date, and a 0-100 progress percentage, then reconciles the
//! result with previously persisted records. Achievement is sticky: once a
//! record is stored as achieved it never reverts, regardless of later edits
//! to the workout history. Progress, by contrast, always reflects current
//! standing.

mod catalog;
mod criteria;
mod engine;

pub use catalog::AchievementCatalog;
pub use criteria::{evaluate_criteria, CriterionOutcome};
pub use engine::AchievementEngine;
