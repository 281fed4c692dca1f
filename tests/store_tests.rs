// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Controller behavior: creation, validation, lookup, selection, reset.

mod common;

use std::collections::HashSet;

use chrono::Utc;
use mapfit_tracker::db::{keys, StorageBackend};
use mapfit_tracker::error::AppError;
use mapfit_tracker::models::{Coordinates, WorkoutKind};
use mapfit_tracker::time_utils::format_month_day;

use common::{london, test_store};

#[test]
fn test_create_run_end_to_end() {
    common::init_tracing();
    let (mut store, backend) = test_store();

    let id = store
        .create(WorkoutKind::Run, london(), 5.2, 24.0, 178.0)
        .expect("valid run should be created");

    // Appears in the store at the last position
    assert_eq!(store.len(), 1);
    let workout = store.iter().last().unwrap();
    assert_eq!(workout.id(), id);

    // Derived pace computed exactly once: 24 / 5.2 ≈ 4.615
    let run = workout.as_run().expect("should be a run");
    assert!((run.pace_min_per_km() - 4.615).abs() < 0.001);

    // Label uses the current month name and day
    let expected_label = format!("Running on {}", format_month_day(Utc::now()));
    assert_eq!(workout.label(), expected_label);

    // Persisted immediately under the fixed key
    let blob = backend.read(keys::WORKOUTS).expect("should be persisted");
    assert!(blob.contains("\"running\""));
}

#[test]
fn test_create_ride_speed() {
    let (mut store, _backend) = test_store();

    store
        .create(WorkoutKind::Ride, london(), 27.0, 95.0, 523.0)
        .unwrap();

    let ride = store.iter().last().unwrap().as_ride().unwrap();
    assert_eq!(ride.speed_kmh(), 27.0 / (95.0 / 60.0));
    assert_eq!(ride.elevation_gain_m(), 523.0);
}

#[test]
fn test_create_rejects_bad_input_without_appending() {
    let (mut store, backend) = test_store();

    let cases: [(f64, f64, f64, &str); 4] = [
        (0.0, 24.0, 178.0, "distance"),
        (-5.0, 24.0, 178.0, "distance"),
        (5.0, f64::NAN, 178.0, "duration"),
        (5.0, 24.0, 0.0, "cadence"),
    ];

    for (distance, duration, cadence, expected_field) in cases {
        let err = store
            .create(WorkoutKind::Run, london(), distance, duration, cadence)
            .expect_err("invalid input must be rejected");

        match err {
            AppError::Validation(validation) => {
                assert!(
                    validation.fields.contains(&expected_field),
                    "expected {expected_field} in {:?}",
                    validation.fields
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    // No change to the store, nothing persisted
    assert_eq!(store.len(), 0);
    assert!(backend.read(keys::WORKOUTS).is_none());
}

#[test]
fn test_create_rejects_negative_elevation() {
    let (mut store, _backend) = test_store();

    let err = store
        .create(WorkoutKind::Ride, london(), 10.0, 30.0, -5.0)
        .expect_err("negative elevation must be rejected");

    assert!(matches!(err, AppError::Validation(v) if v.fields == vec!["elevation"]));
    assert_eq!(store.len(), 0);
}

#[test]
fn test_identifiers_unique_across_session() {
    let (mut store, _backend) = test_store();

    let mut ids = HashSet::new();
    for i in 0..1000 {
        let id = store
            .create(WorkoutKind::Run, london(), 5.0 + i as f64 * 0.01, 25.0, 170.0)
            .unwrap();
        ids.insert(id);
    }

    assert_eq!(ids.len(), 1000);
    assert_eq!(store.len(), 1000);
}

#[test]
fn test_find_by_id() {
    let (mut store, _backend) = test_store();

    let first = store
        .create(WorkoutKind::Run, london(), 5.0, 25.0, 170.0)
        .unwrap();
    let second = store
        .create(WorkoutKind::Ride, Coordinates::new(48.8, 2.3), 20.0, 60.0, 120.0)
        .unwrap();

    assert_eq!(store.find_by_id(first).unwrap().kind(), WorkoutKind::Run);
    assert_eq!(store.find_by_id(second).unwrap().kind(), WorkoutKind::Ride);
}

#[test]
fn test_find_by_id_not_found_is_none() {
    let (store, _backend) = test_store();
    assert!(store.find_by_id(mapfit_tracker::models::WorkoutId(999)).is_none());
}

#[test]
fn test_select_increments_count_and_returns_coordinates() {
    let (mut store, _backend) = test_store();

    let id = store
        .create(WorkoutKind::Run, london(), 5.0, 25.0, 170.0)
        .unwrap();

    assert_eq!(store.select(id), Some(london()));
    assert_eq!(store.select(id), Some(london()));
    assert_eq!(store.find_by_id(id).unwrap().select_count(), 2);

    // Stale id: silently ignored
    assert_eq!(store.select(mapfit_tracker::models::WorkoutId(999)), None);
}

#[test]
fn test_reset_clears_memory_and_durable_record() {
    let (mut store, backend) = test_store();

    store
        .create(WorkoutKind::Run, london(), 5.0, 25.0, 170.0)
        .unwrap();
    store
        .create(WorkoutKind::Ride, london(), 20.0, 60.0, 100.0)
        .unwrap();
    assert!(backend.read(keys::WORKOUTS).is_some());

    store.reset_all().unwrap();

    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
    assert!(backend.read(keys::WORKOUTS).is_none());
}
