// ABOUTME: Fire-and-forget audit logging for service-level writes
// ABOUTME: Detached task; failures are logged and discarded, never propagated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use crate::models::ActivityLogEntry;
use crate::storage::StorageProvider;

/// Best-effort recorder for audit events adjacent to CRUD writes
///
/// Recording is detached from the primary operation: the write happens on a
/// spawned task that is never awaited into the caller's result path, and any
/// store failure is logged and dropped. An audit miss must not fail the
/// operation it annotates.
pub struct ActivityLogRecorder<S> {
    store: Arc<S>,
}

impl<S> Clone for ActivityLogRecorder<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: StorageProvider + 'static> ActivityLogRecorder<S> {
    /// Recorder writing through the given store
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Record an audit event without blocking or failing the caller
    pub fn record(&self, user_id: &str, action: &str, detail: impl Into<String>) {
        let entry = ActivityLogEntry {
            user_id: user_id.to_owned(),
            action: action.to_owned(),
            detail: detail.into(),
            at: Utc::now(),
        };
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            if let Err(error) = store.append_activity_log(&entry).await {
                warn!(
                    user.id = %entry.user_id,
                    audit.action = %entry.action,
                    error = %error,
                    "Dropping activity log entry"
                );
            }
        });
    }
}
