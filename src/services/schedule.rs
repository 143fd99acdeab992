// ABOUTME: Weekly schedule service - validated slot upsert, listing, clearing
// ABOUTME: One slot per (user, slot id); days follow chrono's Weekday
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

use std::sync::Arc;

use chrono::Weekday;
use tracing::info;
use uuid::Uuid;

use super::ActivityLogRecorder;
use crate::constants::limits::{MAX_SLOT_MINUTES, MIN_SLOT_MINUTES};
use crate::errors::{AppError, AppResult};
use crate::models::ScheduleSlot;
use crate::storage::StorageProvider;

/// Validated CRUD over a user's weekly training schedule
pub struct ScheduleService<S> {
    store: Arc<S>,
    recorder: ActivityLogRecorder<S>,
}

impl<S: StorageProvider + 'static> ScheduleService<S> {
    /// Service writing through the given store
    pub fn new(store: Arc<S>) -> Self {
        let recorder = ActivityLogRecorder::new(Arc::clone(&store));
        Self { store, recorder }
    }

    /// Plan a workout on the given day
    ///
    /// # Errors
    ///
    /// Returns a validation error when the exercise name is empty or the
    /// duration is outside the schedulable range; storage errors pass
    /// through.
    pub async fn plan(
        &self,
        user_id: &str,
        day: Weekday,
        exercise: &str,
        duration_minutes: f64,
    ) -> AppResult<ScheduleSlot> {
        let exercise = exercise.trim();
        if exercise.is_empty() {
            return Err(AppError::missing_field("exercise"));
        }
        if !duration_minutes.is_finite()
            || !(MIN_SLOT_MINUTES..=MAX_SLOT_MINUTES).contains(&duration_minutes)
        {
            return Err(AppError::out_of_range(format!(
                "duration must be between {MIN_SLOT_MINUTES} and {MAX_SLOT_MINUTES} minutes"
            )));
        }

        let slot = ScheduleSlot {
            id: Uuid::new_v4().to_string(),
            day,
            exercise: exercise.to_owned(),
            duration_minutes,
        };

        self.store
            .upsert_schedule_slot(user_id, &slot)
            .await
            .map_err(|e| e.with_user_id(user_id))?;

        info!(user.id = %user_id, slot.id = %slot.id, day = ?day, "Schedule slot planned");
        self.recorder
            .record(user_id, "schedule.plan", format!("{exercise} on {day:?}"));
        Ok(slot)
    }

    /// Replace an existing slot after re-validating it
    ///
    /// # Errors
    ///
    /// Returns a validation error for invalid fields; storage errors pass
    /// through.
    pub async fn replace(&self, user_id: &str, slot: ScheduleSlot) -> AppResult<ScheduleSlot> {
        if slot.exercise.trim().is_empty() {
            return Err(AppError::missing_field("exercise"));
        }
        if !slot.duration_minutes.is_finite()
            || !(MIN_SLOT_MINUTES..=MAX_SLOT_MINUTES).contains(&slot.duration_minutes)
        {
            return Err(AppError::out_of_range(format!(
                "duration must be between {MIN_SLOT_MINUTES} and {MAX_SLOT_MINUTES} minutes"
            )));
        }

        self.store
            .upsert_schedule_slot(user_id, &slot)
            .await
            .map_err(|e| e.with_user_id(user_id))?;

        self.recorder.record(user_id, "schedule.replace", slot.id.clone());
        Ok(slot)
    }

    /// The full weekly schedule, ordered by day then slot id
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub async fn week(&self, user_id: &str) -> AppResult<Vec<ScheduleSlot>> {
        self.store
            .schedule(user_id)
            .await
            .map_err(|e| e.with_user_id(user_id))
    }

    /// Remove every slot planned on the given day
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub async fn clear_day(&self, user_id: &str, day: Weekday) -> AppResult<()> {
        self.store
            .clear_schedule_day(user_id, day)
            .await
            .map_err(|e| e.with_user_id(user_id))?;

        self.recorder
            .record(user_id, "schedule.clear", format!("{day:?}"));
        Ok(())
    }
}
