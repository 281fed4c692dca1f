// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout store and controller.
//!
//! Owns the ordered in-memory workout sequence and mediates between
//! user input and persisted state:
//! 1. Validate raw form input
//! 2. Construct the typed variant
//! 3. Append to the sequence (insertion order = display order)
//! 4. Persist the whole sequence through the storage boundary
//!
//! On startup, [`WorkoutStore::rehydrate`] re-dispatches each decoded
//! plain record into its typed variant by discriminator, so reloaded
//! workouts behave identically to freshly created ones.

use chrono::Utc;

use crate::codec::{self, StoredWorkout};
use crate::db::StorageBackend;
use crate::error::{Result, ValidationError};
use crate::models::{Coordinates, Ride, Run, Workout, WorkoutId, WorkoutKind};

/// In-memory authoritative collection of workouts for the session.
pub struct WorkoutStore {
    storage: Box<dyn StorageBackend>,
    storage_key: String,
    workouts: Vec<Workout>,
    next_id: u64,
}

impl WorkoutStore {
    /// Create an empty store over a storage backend.
    ///
    /// The backend and key are injected so tests and map-less embeddings
    /// can substitute an in-memory record.
    pub fn new(storage: Box<dyn StorageBackend>, storage_key: impl Into<String>) -> Self {
        Self {
            storage,
            storage_key: storage_key.into(),
            workouts: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a workout from validated-on-entry form input.
    ///
    /// `extra` is the kind-specific metric: cadence (spm) for a run,
    /// elevation gain (m) for a ride, exactly as the input form shows
    /// one field per type.
    ///
    /// Returns the new workout's identifier. On validation failure
    /// nothing is appended or persisted; a persistence failure after a
    /// successful append is propagated, never swallowed.
    pub fn create(
        &mut self,
        kind: WorkoutKind,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        extra: f64,
    ) -> Result<WorkoutId> {
        // 1. Validate every numeric input, collecting all offending fields
        validate(kind, distance_km, duration_min, extra)?;

        // 2. Construct the typed variant with fresh identity
        let id = WorkoutId(self.next_id);
        let created_at = Utc::now();
        let workout = match kind {
            WorkoutKind::Run => Workout::Run(Run::new(
                id,
                created_at,
                coordinates,
                distance_km,
                duration_min,
                extra,
            )),
            WorkoutKind::Ride => Workout::Ride(Ride::new(
                id,
                created_at,
                coordinates,
                distance_km,
                duration_min,
                extra,
            )),
        };

        // 3. Append, newest last
        self.next_id += 1;
        self.workouts.push(workout);

        // 4. Persist the full sequence
        self.persist()?;

        tracing::info!(id = id.0, kind = %kind, "Workout created");
        Ok(id)
    }

    /// Linear lookup by identifier. `None` is a normal outcome (stale or
    /// unrelated selection events).
    pub fn find_by_id(&self, id: WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.id() == id)
    }

    /// Resolve a selection event: bump the entry's selection counter and
    /// return its coordinates for map centering. Stale ids are ignored.
    pub fn select(&mut self, id: WorkoutId) -> Option<Coordinates> {
        let workout = self.workouts.iter_mut().find(|workout| workout.id() == id)?;
        workout.select();
        Some(workout.coordinates())
    }

    /// Load persisted data, reconstructing the correct typed variant for
    /// each plain record. Invoked once at startup.
    ///
    /// Absent or unreadable records mean "no prior data"; individual
    /// records that cannot be re-dispatched are skipped.
    pub fn rehydrate(&mut self) {
        let Some(raw) = self.storage.read(&self.storage_key) else {
            tracing::debug!("No stored workout record");
            return;
        };

        let records = codec::decode(&raw);
        let decoded = records.len();
        for record in records {
            if let Some(workout) = hydrate(record) {
                // Identifier uniqueness: resume counting above restored ids
                self.next_id = self.next_id.max(workout.id().0 + 1);
                self.workouts.push(workout);
            }
        }

        tracing::info!(
            restored = self.workouts.len(),
            decoded,
            "Workouts rehydrated"
        );
    }

    /// Encode the current full sequence and write it under the fixed key.
    pub fn persist(&mut self) -> Result<()> {
        let record = codec::encode(&self.workouts)?;
        self.storage.write(&self.storage_key, &record)
    }

    /// Destructive full reset: clears the in-memory sequence and removes
    /// the durable record. Irreversible.
    pub fn reset_all(&mut self) -> Result<()> {
        self.workouts.clear();
        self.storage.remove(&self.storage_key)?;
        tracing::info!("Workout store reset");
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter()
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

/// Check the numeric invariants on raw form input, naming every bad field.
fn validate(
    kind: WorkoutKind,
    distance_km: f64,
    duration_min: f64,
    extra: f64,
) -> std::result::Result<(), ValidationError> {
    let mut fields = Vec::new();

    if !(distance_km.is_finite() && distance_km > 0.0) {
        fields.push("distance");
    }
    if !(duration_min.is_finite() && duration_min > 0.0) {
        fields.push("duration");
    }
    match kind {
        WorkoutKind::Run => {
            if !(extra.is_finite() && extra > 0.0) {
                fields.push("cadence");
            }
        }
        WorkoutKind::Ride => {
            if !(extra.is_finite() && extra >= 0.0) {
                fields.push("elevation");
            }
        }
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(fields))
    }
}

/// Re-dispatch one plain record into its typed variant.
///
/// This is the repair step for the model/codec boundary: decoding alone
/// recovers data but not behavior. Records whose discriminator is
/// unknown, or whose fields no longer satisfy the model invariants, are
/// skipped rather than failing the whole load.
fn hydrate(record: StoredWorkout) -> Option<Workout> {
    match record.kind.as_str() {
        "running" => {
            let Some(cadence_spm) = record.cadence_spm else {
                tracing::warn!(id = record.id.0, "Run record missing cadence, skipping");
                return None;
            };
            if validate(WorkoutKind::Run, record.distance_km, record.duration_min, cadence_spm)
                .is_err()
            {
                tracing::warn!(id = record.id.0, "Run record fails invariants, skipping");
                return None;
            }
            Some(Workout::Run(Run::restore(
                record.id,
                record.created_at,
                record.coordinates,
                record.distance_km,
                record.duration_min,
                cadence_spm,
                record.select_count,
            )))
        }
        "cycling" => {
            let Some(elevation_gain_m) = record.elevation_gain_m else {
                tracing::warn!(id = record.id.0, "Ride record missing elevation, skipping");
                return None;
            };
            if validate(
                WorkoutKind::Ride,
                record.distance_km,
                record.duration_min,
                elevation_gain_m,
            )
            .is_err()
            {
                tracing::warn!(id = record.id.0, "Ride record fails invariants, skipping");
                return None;
            }
            Some(Workout::Ride(Ride::restore(
                record.id,
                record.created_at,
                record.coordinates,
                record.distance_km,
                record.duration_min,
                elevation_gain_m,
                record.select_count,
            )))
        }
        other => {
            tracing::warn!(id = record.id.0, kind = other, "Unknown workout kind, skipping");
            None
        }
    }
}
