// ABOUTME: Storage abstraction for stridelog entities
// ABOUTME: Provider trait with per-entity sections; in-memory backend included
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

//! Storage abstraction layer. The store is an opaque document-style
//! collaborator: callers read and upsert whole records keyed by user and
//! entity id. All implementations must behave as last-write-wins on
//! concurrent upserts.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Weekday;

use crate::errors::AppResult;
use crate::models::{
    AchievementRecord, ActivityLogEntry, GoalStatus, ScheduleSlot, TrainingGoal, UserPreferences,
    WeightEntry,
};

mod memory;

pub use memory::MemoryStore;

/// Core storage abstraction trait
///
/// All storage implementations provide this interface to the service layer
/// and the achievement engine.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    // ================================
    // Achievements
    // ================================

    /// Read all stored achievement records for a user, keyed by definition id
    ///
    /// A user with no records yields an empty map, never an error.
    async fn achievement_records(
        &self,
        user_id: &str,
    ) -> AppResult<HashMap<String, AchievementRecord>>;

    /// Create or merge one achievement record keyed by `(user_id, record.id)`
    ///
    /// Records are never deleted. Concurrent upserts for the same key resolve
    /// last-write-wins; callers that recompute records from the same source
    /// data therefore converge rather than corrupt state.
    async fn upsert_achievement_record(
        &self,
        user_id: &str,
        record: &AchievementRecord,
    ) -> AppResult<()>;

    // ================================
    // Weight Entries
    // ================================

    /// Store a new weight entry
    async fn create_weight_entry(&self, user_id: &str, entry: &WeightEntry) -> AppResult<()>;

    /// All weight entries for a user, ascending by date
    async fn weight_entries(&self, user_id: &str) -> AppResult<Vec<WeightEntry>>;

    /// Replace an existing weight entry matched by its id
    async fn update_weight_entry(&self, user_id: &str, entry: &WeightEntry) -> AppResult<()>;

    /// Delete a weight entry by id
    async fn delete_weight_entry(&self, user_id: &str, entry_id: &str) -> AppResult<()>;

    // ================================
    // Training Goals
    // ================================

    /// Store a new training goal
    async fn create_goal(&self, user_id: &str, goal: &TrainingGoal) -> AppResult<()>;

    /// All goals for a user in creation order
    async fn goals(&self, user_id: &str) -> AppResult<Vec<TrainingGoal>>;

    /// Update the lifecycle status of a goal
    async fn update_goal_status(
        &self,
        user_id: &str,
        goal_id: &str,
        status: GoalStatus,
    ) -> AppResult<()>;

    /// Delete a goal by id
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> AppResult<()>;

    // ================================
    // Weekly Schedule
    // ================================

    /// Create or replace a schedule slot keyed by `(user_id, slot.id)`
    async fn upsert_schedule_slot(&self, user_id: &str, slot: &ScheduleSlot) -> AppResult<()>;

    /// All schedule slots for a user, ordered by day then id
    async fn schedule(&self, user_id: &str) -> AppResult<Vec<ScheduleSlot>>;

    /// Remove every slot on the given day
    async fn clear_schedule_day(&self, user_id: &str, day: Weekday) -> AppResult<()>;

    // ================================
    // Preferences
    // ================================

    /// Stored preferences, or `None` when the user never saved any
    async fn preferences(&self, user_id: &str) -> AppResult<Option<UserPreferences>>;

    /// Replace the user's preferences
    async fn set_preferences(&self, user_id: &str, prefs: &UserPreferences) -> AppResult<()>;

    // ================================
    // Activity Log
    // ================================

    /// Append one audit entry; used only by the fire-and-forget recorder
    async fn append_activity_log(&self, entry: &ActivityLogEntry) -> AppResult<()>;
}
