// ABOUTME: Training goal service - validated CRUD over user goals
// ABOUTME: Field validation then store; no progress computation lives here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use super::ActivityLogRecorder;
use crate::constants::limits::{
    MAX_GOAL_TITLE_CHARS, MAX_SESSIONS_PER_WEEK, MIN_SESSIONS_PER_WEEK,
};
use crate::errors::{AppError, AppResult};
use crate::models::{GoalStatus, TrainingGoal};
use crate::storage::StorageProvider;

/// Validated CRUD over a user's training goals
pub struct GoalService<S> {
    store: Arc<S>,
    recorder: ActivityLogRecorder<S>,
}

impl<S: StorageProvider + 'static> GoalService<S> {
    /// Service writing through the given store
    pub fn new(store: Arc<S>) -> Self {
        let recorder = ActivityLogRecorder::new(Arc::clone(&store));
        Self { store, recorder }
    }

    /// Create a new active goal
    ///
    /// # Errors
    ///
    /// Returns a validation error when the title is empty or too long, the
    /// weekly session target is out of range, or the target date lies in the
    /// past; storage errors pass through.
    pub async fn create_goal(
        &self,
        user_id: &str,
        title: &str,
        target_sessions_per_week: u32,
        target_date: Option<NaiveDate>,
    ) -> AppResult<TrainingGoal> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::missing_field("title"));
        }
        if title.chars().count() > MAX_GOAL_TITLE_CHARS {
            return Err(AppError::out_of_range(format!(
                "title must be at most {MAX_GOAL_TITLE_CHARS} characters"
            )));
        }
        if !(MIN_SESSIONS_PER_WEEK..=MAX_SESSIONS_PER_WEEK).contains(&target_sessions_per_week) {
            return Err(AppError::out_of_range(format!(
                "sessions per week must be between {MIN_SESSIONS_PER_WEEK} and {MAX_SESSIONS_PER_WEEK}"
            )));
        }

        let created_at = Utc::now();
        if let Some(target) = target_date {
            if target < created_at.date_naive() {
                return Err(AppError::invalid_input("target date must not be in the past"));
            }
        }

        let goal = TrainingGoal {
            id: Uuid::new_v4().to_string(),
            title: title.to_owned(),
            target_sessions_per_week,
            target_date,
            status: GoalStatus::Active,
            created_at,
        };

        self.store
            .create_goal(user_id, &goal)
            .await
            .map_err(|e| e.with_user_id(user_id))?;

        info!(user.id = %user_id, goal.id = %goal.id, "Training goal created");
        self.recorder
            .record(user_id, "goal.create", goal.title.clone());
        Ok(goal)
    }

    /// All goals for the user in creation order
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub async fn list(&self, user_id: &str) -> AppResult<Vec<TrainingGoal>> {
        self.store
            .goals(user_id)
            .await
            .map_err(|e| e.with_user_id(user_id))
    }

    /// Move a goal to a new lifecycle status
    ///
    /// # Errors
    ///
    /// Returns not-found when the goal does not exist; storage errors pass
    /// through.
    pub async fn set_status(
        &self,
        user_id: &str,
        goal_id: &str,
        status: GoalStatus,
    ) -> AppResult<()> {
        self.store
            .update_goal_status(user_id, goal_id, status)
            .await
            .map_err(|e| e.with_user_id(user_id))?;

        self.recorder
            .record(user_id, "goal.status", format!("{goal_id} -> {status:?}"));
        Ok(())
    }

    /// Delete a goal by id
    ///
    /// # Errors
    ///
    /// Returns not-found when the goal does not exist; storage errors pass
    /// through.
    pub async fn delete(&self, user_id: &str, goal_id: &str) -> AppResult<()> {
        self.store
            .delete_goal(user_id, goal_id)
            .await
            .map_err(|e| e.with_user_id(user_id))?;

        self.recorder
            .record(user_id, "goal.delete", goal_id.to_owned());
        Ok(())
    }
}
