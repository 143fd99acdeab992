// ABOUTME: In-memory storage provider backed by RwLock'd hash maps
// ABOUTME: Durable for the process lifetime; upserts are last-write-wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Weekday;
use tokio::sync::RwLock;

use super::StorageProvider;
use crate::errors::{AppError, AppResult};
use crate::models::{
    AchievementRecord, ActivityLogEntry, GoalStatus, ScheduleSlot, TrainingGoal, UserPreferences,
    WeightEntry,
};

#[derive(Debug, Default)]
struct Inner {
    achievements: HashMap<String, HashMap<String, AchievementRecord>>,
    weights: HashMap<String, Vec<WeightEntry>>,
    goals: HashMap<String, Vec<TrainingGoal>>,
    schedule: HashMap<String, Vec<ScheduleSlot>>,
    preferences: HashMap<String, UserPreferences>,
    activity_log: Vec<ActivityLogEntry>,
}

/// In-memory storage provider
///
/// Backs tests and single-process deployments. Unlike a cache there is no
/// eviction: achievement records must survive for the lifetime of the
/// process. A single `RwLock` guards all collections; every operation takes
/// the lock exactly once.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageProvider for MemoryStore {
    async fn achievement_records(
        &self,
        user_id: &str,
    ) -> AppResult<HashMap<String, AchievementRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.achievements.get(user_id).cloned().unwrap_or_default())
    }

    async fn upsert_achievement_record(
        &self,
        user_id: &str,
        record: &AchievementRecord,
    ) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .achievements
            .entry(user_id.to_owned())
            .or_default()
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn create_weight_entry(&self, user_id: &str, entry: &WeightEntry) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .weights
            .entry(user_id.to_owned())
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn weight_entries(&self, user_id: &str) -> AppResult<Vec<WeightEntry>> {
        let inner = self.inner.read().await;
        let mut entries = inner.weights.get(user_id).cloned().unwrap_or_default();
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }

    async fn update_weight_entry(&self, user_id: &str, entry: &WeightEntry) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        let entries = inner
            .weights
            .get_mut(user_id)
            .ok_or_else(|| AppError::not_found("weight entry").with_resource_id(&entry.id))?;
        let slot = entries
            .iter_mut()
            .find(|e| e.id == entry.id)
            .ok_or_else(|| AppError::not_found("weight entry").with_resource_id(&entry.id))?;
        *slot = entry.clone();
        Ok(())
    }

    async fn delete_weight_entry(&self, user_id: &str, entry_id: &str) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        let entries = inner
            .weights
            .get_mut(user_id)
            .ok_or_else(|| AppError::not_found("weight entry").with_resource_id(entry_id))?;
        let before = entries.len();
        entries.retain(|e| e.id != entry_id);
        if entries.len() == before {
            return Err(AppError::not_found("weight entry").with_resource_id(entry_id));
        }
        Ok(())
    }

    async fn create_goal(&self, user_id: &str, goal: &TrainingGoal) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .goals
            .entry(user_id.to_owned())
            .or_default()
            .push(goal.clone());
        Ok(())
    }

    async fn goals(&self, user_id: &str) -> AppResult<Vec<TrainingGoal>> {
        let inner = self.inner.read().await;
        Ok(inner.goals.get(user_id).cloned().unwrap_or_default())
    }

    async fn update_goal_status(
        &self,
        user_id: &str,
        goal_id: &str,
        status: GoalStatus,
    ) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        let goal = inner
            .goals
            .get_mut(user_id)
            .and_then(|goals| goals.iter_mut().find(|g| g.id == goal_id))
            .ok_or_else(|| AppError::not_found("training goal").with_resource_id(goal_id))?;
        goal.status = status;
        Ok(())
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        let goals = inner
            .goals
            .get_mut(user_id)
            .ok_or_else(|| AppError::not_found("training goal").with_resource_id(goal_id))?;
        let before = goals.len();
        goals.retain(|g| g.id != goal_id);
        if goals.len() == before {
            return Err(AppError::not_found("training goal").with_resource_id(goal_id));
        }
        Ok(())
    }

    async fn upsert_schedule_slot(&self, user_id: &str, slot: &ScheduleSlot) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        let slots = inner.schedule.entry(user_id.to_owned()).or_default();
        match slots.iter_mut().find(|s| s.id == slot.id) {
            Some(existing) => *existing = slot.clone(),
            None => slots.push(slot.clone()),
        }
        Ok(())
    }

    async fn schedule(&self, user_id: &str) -> AppResult<Vec<ScheduleSlot>> {
        let inner = self.inner.read().await;
        let mut slots = inner.schedule.get(user_id).cloned().unwrap_or_default();
        slots.sort_by_key(|s| (s.day.num_days_from_monday(), s.id.clone()));
        Ok(slots)
    }

    async fn clear_schedule_day(&self, user_id: &str, day: Weekday) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        if let Some(slots) = inner.schedule.get_mut(user_id) {
            slots.retain(|s| s.day != day);
        }
        Ok(())
    }

    async fn preferences(&self, user_id: &str) -> AppResult<Option<UserPreferences>> {
        let inner = self.inner.read().await;
        Ok(inner.preferences.get(user_id).copied())
    }

    async fn set_preferences(&self, user_id: &str, prefs: &UserPreferences) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.preferences.insert(user_id.to_owned(), *prefs);
        Ok(())
    }

    async fn append_activity_log(&self, entry: &ActivityLogEntry) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner.activity_log.push(entry.clone());
        Ok(())
    }
}

impl MemoryStore {
    /// Snapshot of the activity log, oldest first; test and debugging hook
    pub async fn activity_log(&self) -> Vec<ActivityLogEntry> {
        self.inner.read().await.activity_log.clone()
    }
}
