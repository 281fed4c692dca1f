// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout domain model.
//!
//! A workout is one of two variants (run or ride), each carrying the raw
//! inputs plus a derived metric computed exactly once at construction.
//! Nothing is mutated after construction except the selection counter,
//! so the derived fields stay consistent with their inputs for the life
//! of the value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::geo::Coordinates;
use crate::time_utils::format_month_day;

/// Opaque workout identifier, unique within a store instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(pub u64);

/// Workout discriminator. The serialized names ("running"/"cycling") are
/// the stored wire format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutKind {
    #[serde(rename = "running")]
    Run,
    #[serde(rename = "cycling")]
    Ride,
}

impl WorkoutKind {
    /// Wire/discriminator name.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Run => "running",
            WorkoutKind::Ride => "cycling",
        }
    }

    /// Capitalized kind word used in display labels.
    pub fn title(&self) -> &'static str {
        match self {
            WorkoutKind::Run => "Running",
            WorkoutKind::Ride => "Cycling",
        }
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded activity session. Closed sum type: every field is declared
/// upfront per variant and no field is added post-construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Run(Run),
    Ride(Ride),
}

/// A running workout with cadence and a derived pace.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coordinates: Coordinates,
    distance_km: f64,
    duration_min: f64,
    cadence_spm: f64,
    pace_min_per_km: f64,
    label: String,
    select_count: u32,
}

/// A cycling workout with elevation gain and a derived speed.
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coordinates: Coordinates,
    distance_km: f64,
    duration_min: f64,
    elevation_gain_m: f64,
    speed_kmh: f64,
    label: String,
    select_count: u32,
}

fn make_label(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    format!("{} on {}", kind.title(), format_month_day(created_at))
}

impl Run {
    /// Construct a new run. The derived pace (min/km) and the display
    /// label are computed here and never again.
    ///
    /// # Panics
    ///
    /// If `distance_km`, `duration_min`, or `cadence_spm` is non-finite
    /// or non-positive. Callers validate first; the model is only ever
    /// constructed with values already known valid.
    pub fn new(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Self {
        Self::restore(id, created_at, coordinates, distance_km, duration_min, cadence_spm, 0)
    }

    /// Reconstruct a run from persisted data, restoring its identity and
    /// selection count. Derived fields are recomputed from the same
    /// inputs, which is deterministic.
    ///
    /// # Panics
    ///
    /// Same preconditions as [`Run::new`]; persisted records are
    /// validated before reaching this constructor.
    pub fn restore(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
        select_count: u32,
    ) -> Self {
        assert!(
            distance_km.is_finite() && distance_km > 0.0,
            "run distance must be positive"
        );
        assert!(
            duration_min.is_finite() && duration_min > 0.0,
            "run duration must be positive"
        );
        assert!(
            cadence_spm.is_finite() && cadence_spm > 0.0,
            "run cadence must be positive"
        );

        let pace_min_per_km = duration_min / distance_km;
        let label = make_label(WorkoutKind::Run, created_at);

        Self {
            id,
            created_at,
            coordinates,
            distance_km,
            duration_min,
            cadence_spm,
            pace_min_per_km,
            label,
            select_count,
        }
    }

    pub fn cadence_spm(&self) -> f64 {
        self.cadence_spm
    }

    /// Pace in minutes per kilometer, computed once at construction.
    pub fn pace_min_per_km(&self) -> f64 {
        self.pace_min_per_km
    }
}

impl Ride {
    /// Construct a new ride. The derived speed (km/h) and the display
    /// label are computed here and never again.
    ///
    /// # Panics
    ///
    /// If `distance_km` or `duration_min` is non-finite or non-positive,
    /// or `elevation_gain_m` is non-finite or negative. Callers validate
    /// first.
    pub fn new(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        Self::restore(
            id,
            created_at,
            coordinates,
            distance_km,
            duration_min,
            elevation_gain_m,
            0,
        )
    }

    /// Reconstruct a ride from persisted data, restoring its identity
    /// and selection count.
    ///
    /// # Panics
    ///
    /// Same preconditions as [`Ride::new`].
    pub fn restore(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
        select_count: u32,
    ) -> Self {
        assert!(
            distance_km.is_finite() && distance_km > 0.0,
            "ride distance must be positive"
        );
        assert!(
            duration_min.is_finite() && duration_min > 0.0,
            "ride duration must be positive"
        );
        assert!(
            elevation_gain_m.is_finite() && elevation_gain_m >= 0.0,
            "ride elevation gain must be non-negative"
        );

        let speed_kmh = distance_km / (duration_min / 60.0);
        let label = make_label(WorkoutKind::Ride, created_at);

        Self {
            id,
            created_at,
            coordinates,
            distance_km,
            duration_min,
            elevation_gain_m,
            speed_kmh,
            label,
            select_count,
        }
    }

    pub fn elevation_gain_m(&self) -> f64 {
        self.elevation_gain_m
    }

    /// Speed in km/h, computed once at construction.
    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }
}

impl Workout {
    pub fn id(&self) -> WorkoutId {
        match self {
            Workout::Run(run) => run.id,
            Workout::Ride(ride) => ride.id,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Workout::Run(run) => run.created_at,
            Workout::Ride(ride) => ride.created_at,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        match self {
            Workout::Run(run) => run.coordinates,
            Workout::Ride(ride) => ride.coordinates,
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Run(run) => run.distance_km,
            Workout::Ride(ride) => ride.distance_km,
        }
    }

    pub fn duration_min(&self) -> f64 {
        match self {
            Workout::Run(run) => run.duration_min,
            Workout::Ride(ride) => ride.duration_min,
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Run(_) => WorkoutKind::Run,
            Workout::Ride(_) => WorkoutKind::Ride,
        }
    }

    /// Display label, e.g. "Running on April 14".
    pub fn label(&self) -> &str {
        match self {
            Workout::Run(run) => &run.label,
            Workout::Ride(ride) => &ride.label,
        }
    }

    pub fn select_count(&self) -> u32 {
        match self {
            Workout::Run(run) => run.select_count,
            Workout::Ride(ride) => ride.select_count,
        }
    }

    /// Record a user selection of this entry. No other observable effect.
    pub fn select(&mut self) {
        match self {
            Workout::Run(run) => run.select_count += 1,
            Workout::Ride(ride) => ride.select_count += 1,
        }
    }

    pub fn as_run(&self) -> Option<&Run> {
        match self {
            Workout::Run(run) => Some(run),
            Workout::Ride(_) => None,
        }
    }

    pub fn as_ride(&self) -> Option<&Ride> {
        match self {
            Workout::Ride(ride) => Some(ride),
            Workout::Run(_) => None,
        }
    }
}
