// ABOUTME: Main library entry point for the stridelog fitness tracking core
// ABOUTME: Exposes models, storage, services, and the achievement evaluation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

//! # Stridelog Core
//!
//! In-process backend library for a consumer fitness tracker: users log
//! workouts, track weight, set goals, follow a weekly schedule, and earn
//! achievements. Persistence goes through the [`storage::StorageProvider`]
//! trait so the document store stays an opaque collaborator; the bundled
//! [`storage::MemoryStore`] backs tests and single-process deployments.
//!
//! The achievement evaluator in [`achievements`] is the one component with
//! derived computation: it scans a user's workout history against a fixed
//! catalog of criteria and reconciles the result with previously persisted
//! state. Everything else is validation-then-store CRUD.

/// Achievement catalog, criteria evaluation, and the evaluation engine
pub mod achievements;

/// System-wide constants and validation limits
pub mod constants;

/// Unified error handling with error codes and structured context
pub mod errors;

/// Logging configuration and structured logging setup
pub mod logging;

/// Core data models for workouts, achievements, and tracking entities
pub mod models;

/// Per-entity services: weight, goals, schedule, preferences, activity log
pub mod services;

/// Storage provider trait and the in-memory implementation
pub mod storage;

pub use achievements::{AchievementCatalog, AchievementEngine};
pub use errors::{AppError, AppResult, ErrorCode};
pub use storage::{MemoryStore, StorageProvider};
