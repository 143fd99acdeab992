// ABOUTME: Per-entity service layer - validation, normalization, then store
// ABOUTME: Weight, goals, schedule, preferences, and best-effort activity logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

//! Thin per-entity services. Each one validates and normalizes caller input,
//! delegates persistence to the [`crate::storage::StorageProvider`], and
//! emits a best-effort audit event. None of them carries derived computation;
//! that lives in [`crate::achievements`].

mod activity_log;
mod goals;
mod preferences;
mod schedule;
mod weight;

pub use activity_log::ActivityLogRecorder;
pub use goals::GoalService;
pub use preferences::PreferencesService;
pub use schedule::ScheduleService;
pub use weight::{kg_to_lb, lb_to_kg, WeightService};
