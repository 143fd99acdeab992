// ABOUTME: User preferences service - read-or-default and replace
// ABOUTME: Closed enums make most invalid preference input unrepresentable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

use std::sync::Arc;

use tracing::info;

use super::ActivityLogRecorder;
use crate::errors::AppResult;
use crate::models::UserPreferences;
use crate::storage::StorageProvider;

/// Read-or-default access to per-user display preferences
pub struct PreferencesService<S> {
    store: Arc<S>,
    recorder: ActivityLogRecorder<S>,
}

impl<S: StorageProvider + 'static> PreferencesService<S> {
    /// Service writing through the given store
    pub fn new(store: Arc<S>) -> Self {
        let recorder = ActivityLogRecorder::new(Arc::clone(&store));
        Self { store, recorder }
    }

    /// Stored preferences, or the defaults when the user never saved any
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub async fn get(&self, user_id: &str) -> AppResult<UserPreferences> {
        Ok(self
            .store
            .preferences(user_id)
            .await
            .map_err(|e| e.with_user_id(user_id))?
            .unwrap_or_default())
    }

    /// Replace the user's preferences
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub async fn set(&self, user_id: &str, prefs: UserPreferences) -> AppResult<()> {
        self.store
            .set_preferences(user_id, &prefs)
            .await
            .map_err(|e| e.with_user_id(user_id))?;

        info!(user.id = %user_id, units = ?prefs.units, theme = ?prefs.theme, "Preferences updated");
        self.recorder
            .record(user_id, "preferences.set", format!("{prefs:?}"));
        Ok(())
    }
}
