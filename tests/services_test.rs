// ABOUTME: Integration tests for the per-entity CRUD services
// ABOUTME: Validation tables, defaults, schedule upsert, and audit logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

mod common;

use std::sync::Arc;
use std::time::Duration;

use chrono::Weekday;
use common::{create_test_store, date};
use stridelog::errors::ErrorCode;
use stridelog::models::{GoalStatus, Theme, UnitSystem, UserPreferences};
use stridelog::services::{
    kg_to_lb, lb_to_kg, GoalService, PreferencesService, ScheduleService, WeightService,
};

#[tokio::test]
async fn weight_entries_validate_and_sort() {
    let store = create_test_store();
    let service = WeightService::new(Arc::clone(&store));

    service
        .log_weight("u1", date("2025-04-10"), 80.2, None)
        .await
        .unwrap();
    service
        .log_weight("u1", date("2025-04-01"), 81.0, Some("  morning  ".into()))
        .await
        .unwrap();

    let history = service.history("u1").await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].date, date("2025-04-01"));
    assert_eq!(history[0].note.as_deref(), Some("morning"));

    let err = service
        .log_weight("u1", date("2025-04-11"), 10.0, None)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    let err = service
        .log_weight("u1", date("2025-04-11"), f64::INFINITY, None)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn weight_update_and_delete_round_trip() {
    let store = create_test_store();
    let service = WeightService::new(Arc::clone(&store));

    let entry = service
        .log_weight("u1", date("2025-04-10"), 80.0, None)
        .await
        .unwrap();

    let mut updated = entry.clone();
    updated.weight_kg = 79.4;
    service.update_entry("u1", updated).await.unwrap();

    let history = service.history("u1").await.unwrap();
    assert!((history[0].weight_kg - 79.4).abs() < f64::EPSILON);

    service.delete_entry("u1", &entry.id).await.unwrap();
    assert!(service.history("u1").await.unwrap().is_empty());

    let err = service.delete_entry("u1", &entry.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn unit_conversion_is_symmetric() {
    assert!((kg_to_lb(100.0) - 220.462_262_18).abs() < 1e-6);
    assert!((lb_to_kg(kg_to_lb(72.5)) - 72.5).abs() < 1e-9);
}

#[tokio::test]
async fn goal_validation_table() {
    let store = create_test_store();
    let service = GoalService::new(Arc::clone(&store));

    let goal = service
        .create_goal("u1", "  Run three times a week  ", 3, None)
        .await
        .unwrap();
    assert_eq!(goal.title, "Run three times a week");
    assert_eq!(goal.status, GoalStatus::Active);

    let err = service.create_goal("u1", "   ", 3, None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);

    let err = service.create_goal("u1", "Too much", 20, None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    let err = service
        .create_goal("u1", "Yesterday's goal", 3, Some(date("2001-01-01")))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn goal_status_transitions_persist() {
    let store = create_test_store();
    let service = GoalService::new(Arc::clone(&store));

    let goal = service
        .create_goal("u1", "Swim weekly", 1, None)
        .await
        .unwrap();
    service
        .set_status("u1", &goal.id, GoalStatus::Completed)
        .await
        .unwrap();

    let goals = service.list("u1").await.unwrap();
    assert_eq!(goals[0].status, GoalStatus::Completed);

    service.delete("u1", &goal.id).await.unwrap();
    assert!(service.list("u1").await.unwrap().is_empty());
}

#[tokio::test]
async fn schedule_slots_upsert_and_clear() {
    let store = create_test_store();
    let service = ScheduleService::new(Arc::clone(&store));

    service
        .plan("u1", Weekday::Mon, "Intervals", 45.0)
        .await
        .unwrap();
    let slot = service
        .plan("u1", Weekday::Wed, "Long run", 90.0)
        .await
        .unwrap();

    let mut replaced = slot.clone();
    replaced.duration_minutes = 75.0;
    service.replace("u1", replaced).await.unwrap();

    let week = service.week("u1").await.unwrap();
    assert_eq!(week.len(), 2);
    assert_eq!(week[0].day, Weekday::Mon);
    assert!((week[1].duration_minutes - 75.0).abs() < f64::EPSILON);

    service.clear_day("u1", Weekday::Mon).await.unwrap();
    let week = service.week("u1").await.unwrap();
    assert_eq!(week.len(), 1);
    assert_eq!(week[0].day, Weekday::Wed);

    let err = service
        .plan("u1", Weekday::Fri, "Stretch", 2.0)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[tokio::test]
async fn preferences_default_until_set() {
    let store = create_test_store();
    let service = PreferencesService::new(Arc::clone(&store));

    let prefs = service.get("u1").await.unwrap();
    assert_eq!(prefs, UserPreferences::default());

    let custom = UserPreferences {
        units: UnitSystem::Imperial,
        theme: Theme::Dark,
        week_starts_on: Weekday::Sun,
    };
    service.set("u1", custom).await.unwrap();
    assert_eq!(service.get("u1").await.unwrap(), custom);

    // Other users keep the defaults.
    assert_eq!(service.get("u2").await.unwrap(), UserPreferences::default());
}

#[tokio::test]
async fn crud_writes_leave_audit_entries() {
    let store = create_test_store();
    let weight = WeightService::new(Arc::clone(&store));
    let goals = GoalService::new(Arc::clone(&store));

    weight
        .log_weight("u1", date("2025-04-10"), 80.0, None)
        .await
        .unwrap();
    goals.create_goal("u1", "Row daily", 7, None).await.unwrap();

    // The recorder is detached; give it a moment.
    tokio::time::sleep(Duration::from_millis(50)).await;

    let log = store.activity_log().await;
    let actions: Vec<&str> = log.iter().map(|e| e.action.as_str()).collect();
    assert!(actions.contains(&"weight.create"));
    assert!(actions.contains(&"goal.create"));
}
