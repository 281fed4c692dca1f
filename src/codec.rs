// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence codec between the typed workout sequence and the durable
//! text record.
//!
//! Encoding is a field-preserving JSON rendition of the whole sequence
//! under one key. Decoding deliberately stops at plain [`StoredWorkout`]
//! records: a decoded record carries data but no behavior, and only the
//! store may re-dispatch it into a typed variant via its discriminator.
//! Skipping that step is how reloaded workouts silently lose their
//! derived-metric accessors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Coordinates, Workout, WorkoutId};

/// Plain persisted form of a workout.
///
/// Every field of the model is preserved, including the derived metrics
/// and the selection counter. The discriminator is kept as a raw string
/// so records with an unknown kind still decode and can be skipped
/// individually.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredWorkout {
    pub id: WorkoutId,
    pub created_at: DateTime<Utc>,
    pub coordinates: Coordinates,
    /// Discriminator: "running" or "cycling"
    pub kind: String,
    pub distance_km: f64,
    pub duration_min: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence_spm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace_min_per_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_kmh: Option<f64>,
    pub label: String,
    #[serde(default)]
    pub select_count: u32,
}

impl StoredWorkout {
    /// Flatten a typed workout into its persisted form.
    pub fn from_workout(workout: &Workout) -> Self {
        Self {
            id: workout.id(),
            created_at: workout.created_at(),
            coordinates: workout.coordinates(),
            kind: workout.kind().as_str().to_string(),
            distance_km: workout.distance_km(),
            duration_min: workout.duration_min(),
            cadence_spm: workout.as_run().map(|run| run.cadence_spm()),
            pace_min_per_km: workout.as_run().map(|run| run.pace_min_per_km()),
            elevation_gain_m: workout.as_ride().map(|ride| ride.elevation_gain_m()),
            speed_kmh: workout.as_ride().map(|ride| ride.speed_kmh()),
            label: workout.label().to_string(),
            select_count: workout.select_count(),
        }
    }
}

/// Encode the full ordered sequence as one JSON text record.
pub fn encode(workouts: &[Workout]) -> Result<String> {
    let records: Vec<StoredWorkout> = workouts.iter().map(StoredWorkout::from_workout).collect();
    let text = serde_json::to_string(&records)
        .map_err(|e| anyhow::anyhow!("failed to encode workouts: {e}"))?;
    Ok(text)
}

/// Decode a text record into plain workout records.
///
/// A corrupted or structurally unreadable record yields "no prior data",
/// never an error: durable storage is a best-effort cache, not the
/// source of truth for the current session.
pub fn decode(raw: &str) -> Vec<StoredWorkout> {
    match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(err) => {
            tracing::debug!(error = %err, "Stored workout record unreadable, starting empty");
            Vec::new()
        }
    }
}
