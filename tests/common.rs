// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Quiet logging setup plus store, engine, and session helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness
#![allow(dead_code)]

//! Shared test utilities for `stridelog`

use std::sync::{Arc, Once};

use chrono::NaiveDate;
use stridelog::models::WorkoutSession;
use stridelog::{AchievementEngine, MemoryStore};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory store
pub fn create_test_store() -> Arc<MemoryStore> {
    init_test_logging();
    Arc::new(MemoryStore::new())
}

/// Engine over a fresh store and the default catalog
pub fn create_test_engine() -> (Arc<MemoryStore>, AchievementEngine<MemoryStore>) {
    let store = create_test_store();
    let engine = AchievementEngine::new(Arc::clone(&store));
    (store, engine)
}

/// Parse an ISO date; panics on bad test input
pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// Dated workout session with the given duration
pub fn session(id: &str, day: &str, minutes: f64) -> WorkoutSession {
    WorkoutSession::new(id, Some(date(day)), minutes)
}

/// `count` daily sessions starting 2025-01-01, `minutes` each
pub fn daily_sessions(count: u32, minutes: f64) -> Vec<WorkoutSession> {
    let start = date("2025-01-01");
    (0..count)
        .map(|i| {
            let day = start + chrono::Duration::days(i64::from(i));
            WorkoutSession::new(format!("w{i}"), Some(day), minutes)
        })
        .collect()
}
