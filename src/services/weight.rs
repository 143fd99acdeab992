// ABOUTME: Weight tracking service - validated CRUD over weight entries
// ABOUTME: Includes kg/lb conversion helpers for imperial-unit callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use super::ActivityLogRecorder;
use crate::constants::limits::{MAX_NOTE_CHARS, MAX_WEIGHT_KG, MIN_WEIGHT_KG};
use crate::errors::{AppError, AppResult};
use crate::models::WeightEntry;
use crate::storage::StorageProvider;

/// Pounds per kilogram
const LB_PER_KG: f64 = 2.204_622_621_8;

/// Convert kilograms to pounds
#[must_use]
pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

/// Convert pounds to kilograms
#[must_use]
pub fn lb_to_kg(lb: f64) -> f64 {
    lb / LB_PER_KG
}

/// Validated CRUD over a user's weight history
pub struct WeightService<S> {
    store: Arc<S>,
    recorder: ActivityLogRecorder<S>,
}

impl<S: StorageProvider + 'static> WeightService<S> {
    /// Service writing through the given store
    pub fn new(store: Arc<S>) -> Self {
        let recorder = ActivityLogRecorder::new(Arc::clone(&store));
        Self { store, recorder }
    }

    /// Record a new weight measurement
    ///
    /// # Errors
    ///
    /// Returns a validation error when the weight is outside the plausible
    /// range or the note exceeds its length limit; storage errors pass
    /// through.
    pub async fn log_weight(
        &self,
        user_id: &str,
        date: NaiveDate,
        weight_kg: f64,
        note: Option<String>,
    ) -> AppResult<WeightEntry> {
        validate_weight(weight_kg)?;
        let entry = WeightEntry {
            id: Uuid::new_v4().to_string(),
            date,
            weight_kg,
            note: normalize_note(note)?,
        };

        self.store
            .create_weight_entry(user_id, &entry)
            .await
            .map_err(|e| e.with_user_id(user_id))?;

        info!(user.id = %user_id, entry.id = %entry.id, weight.kg = weight_kg, "Weight entry created");
        self.recorder
            .record(user_id, "weight.create", format!("{weight_kg} kg on {date}"));
        Ok(entry)
    }

    /// All weight entries for the user, ascending by date
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub async fn history(&self, user_id: &str) -> AppResult<Vec<WeightEntry>> {
        self.store
            .weight_entries(user_id)
            .await
            .map_err(|e| e.with_user_id(user_id))
    }

    /// Replace an existing entry after re-validating its fields
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-range fields, not-found when the
    /// entry does not exist, and passes storage errors through.
    pub async fn update_entry(
        &self,
        user_id: &str,
        mut entry: WeightEntry,
    ) -> AppResult<WeightEntry> {
        validate_weight(entry.weight_kg)?;
        entry.note = normalize_note(entry.note.take())?;

        self.store
            .update_weight_entry(user_id, &entry)
            .await
            .map_err(|e| e.with_user_id(user_id))?;

        self.recorder
            .record(user_id, "weight.update", entry.id.clone());
        Ok(entry)
    }

    /// Delete an entry by id
    ///
    /// # Errors
    ///
    /// Returns not-found when the entry does not exist; storage errors pass
    /// through.
    pub async fn delete_entry(&self, user_id: &str, entry_id: &str) -> AppResult<()> {
        self.store
            .delete_weight_entry(user_id, entry_id)
            .await
            .map_err(|e| e.with_user_id(user_id))?;

        self.recorder
            .record(user_id, "weight.delete", entry_id.to_owned());
        Ok(())
    }
}

fn validate_weight(weight_kg: f64) -> AppResult<()> {
    if !weight_kg.is_finite() {
        return Err(AppError::invalid_input("weight must be a finite number"));
    }
    if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg) {
        return Err(AppError::out_of_range(format!(
            "weight must be between {MIN_WEIGHT_KG} and {MAX_WEIGHT_KG} kg"
        )));
    }
    Ok(())
}

fn normalize_note(note: Option<String>) -> AppResult<Option<String>> {
    match note {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            if trimmed.chars().count() > MAX_NOTE_CHARS {
                return Err(AppError::out_of_range(format!(
                    "note must be at most {MAX_NOTE_CHARS} characters"
                )));
            }
            Ok(Some(trimmed.to_owned()))
        }
    }
}
