// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presentation adapter.
//!
//! Translates store events into map-marker and list-row render requests
//! for the external map/DOM collaborators, and collaborator events
//! (form submission, entry selection) into store calls. The adapter
//! holds no workout copies of its own, only identifiers flowing through
//! events; the store stays the single owner of the sequence.

use crate::error::Result;
use crate::models::{Coordinates, Workout, WorkoutId, WorkoutKind};
use crate::services::{LocationService, WorkoutStore};

/// Marker placement request for the map collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerRequest {
    pub id: WorkoutId,
    pub coordinates: Coordinates,
    pub kind: WorkoutKind,
    pub icon: &'static str,
    pub popup_class: &'static str,
    pub popup_text: String,
}

/// One formatted metric on a list row.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// List row render request: the title plus four metrics (distance,
/// duration, then the kind-specific derived and raw metrics).
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub id: WorkoutId,
    pub kind: WorkoutKind,
    pub title: String,
    pub metrics: Vec<Metric>,
}

/// Map collaborator (tile rendering, markers, pan/zoom are its problem).
pub trait MapView {
    fn show_map(&mut self, center: Coordinates, zoom: u8);
    fn add_marker(&mut self, marker: &MarkerRequest);
    fn center_on(&mut self, coordinates: Coordinates, zoom: u8);
}

/// List/form collaborator.
pub trait ListView {
    fn add_row(&mut self, row: &ListRow);
    fn clear(&mut self);
    fn show_error(&mut self, message: &str);
}

/// Mediates between the workout store and the view collaborators.
pub struct Presenter<M: MapView, L: ListView, G: LocationService> {
    store: WorkoutStore,
    map: M,
    list: L,
    location: G,
    map_zoom: u8,
    map_ready: bool,
}

impl<M: MapView, L: ListView, G: LocationService> Presenter<M, L, G> {
    pub fn new(store: WorkoutStore, map: M, list: L, location: G, map_zoom: u8) -> Self {
        Self {
            store,
            map,
            list,
            location,
            map_zoom,
            map_ready: false,
        }
    }

    /// Startup sequence: rehydrate the store, render the list (the list
    /// does not need the map), then request the one-shot position fix
    /// and feed its outcome through [`Presenter::on_location_fix`].
    pub fn start(&mut self) {
        self.store.rehydrate();
        for workout in self.store.iter() {
            self.list.add_row(&list_row(workout));
        }

        let fix = self.location.current_position();
        self.on_location_fix(fix);
    }

    /// Outcome of the position fix, however late it arrives.
    ///
    /// On success the map is shown and every stored workout gets its
    /// marker. On failure the user is told and the session continues
    /// without a map; loaded and persisted data stay intact.
    pub fn on_location_fix(&mut self, fix: Result<Coordinates>) {
        match fix {
            Ok(center) => {
                self.map.show_map(center, self.map_zoom);
                self.map_ready = true;
                for workout in self.store.iter() {
                    self.map.add_marker(&marker_request(workout));
                }
            }
            Err(err) => {
                tracing::warn!("Location fix failed, continuing without map");
                self.list.show_error(&err.user_message());
            }
        }
    }

    /// A validated form submission against the given map point.
    ///
    /// Validation failures are surfaced to the user and nothing is
    /// rendered; on success the new workout gets a marker (if the map is
    /// ready) and a list row.
    pub fn on_submit(
        &mut self,
        kind: WorkoutKind,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        extra: f64,
    ) -> Result<WorkoutId> {
        let id = match self
            .store
            .create(kind, coordinates, distance_km, duration_min, extra)
        {
            Ok(id) => id,
            Err(err) => {
                self.list.show_error(&err.user_message());
                return Err(err);
            }
        };

        // find_by_id cannot miss here; create just returned this id
        if let Some(workout) = self.store.find_by_id(id) {
            let marker = marker_request(workout);
            let row = list_row(workout);
            if self.map_ready {
                self.map.add_marker(&marker);
            }
            self.list.add_row(&row);
        }

        Ok(id)
    }

    /// A list-row or marker activation event. Stale or unrelated ids are
    /// silently ignored.
    pub fn on_entry_selected(&mut self, id: WorkoutId) {
        if let Some(coordinates) = self.store.select(id) {
            if self.map_ready {
                self.map.center_on(coordinates, self.map_zoom);
            }
        }
    }

    /// Destructive full reset. The embedder is expected to reload the
    /// presentation layer afterwards; the list is cleared here so a
    /// non-reloading embedder does not show rows for deleted workouts.
    pub fn reset(&mut self) -> Result<()> {
        self.store.reset_all()?;
        self.list.clear();
        self.map_ready = false;
        Ok(())
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }
}

fn icon_for(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Run => "🏃‍♂️",
        WorkoutKind::Ride => "🚴‍♀️",
    }
}

fn marker_request(workout: &Workout) -> MarkerRequest {
    let kind = workout.kind();
    let icon = icon_for(kind);
    let popup_class = match kind {
        WorkoutKind::Run => "running-popup",
        WorkoutKind::Ride => "cycling-popup",
    };

    MarkerRequest {
        id: workout.id(),
        coordinates: workout.coordinates(),
        kind,
        icon,
        popup_class,
        popup_text: format!("{icon} {}", workout.label()),
    }
}

fn list_row(workout: &Workout) -> ListRow {
    let kind = workout.kind();
    let mut metrics = vec![
        Metric {
            icon: icon_for(kind),
            value: format!("{}", workout.distance_km()),
            unit: "km",
        },
        Metric {
            icon: "⏱",
            value: format!("{}", workout.duration_min()),
            unit: "min",
        },
    ];

    // Derived metrics are shown to one decimal place
    match workout {
        Workout::Run(run) => {
            metrics.push(Metric {
                icon: "⚡️",
                value: format!("{:.1}", run.pace_min_per_km()),
                unit: "min/km",
            });
            metrics.push(Metric {
                icon: "🦶🏼",
                value: format!("{}", run.cadence_spm()),
                unit: "spm",
            });
        }
        Workout::Ride(ride) => {
            metrics.push(Metric {
                icon: "⚡️",
                value: format!("{:.1}", ride.speed_kmh()),
                unit: "km/h",
            });
            metrics.push(Metric {
                icon: "⛰",
                value: format!("{}", ride.elevation_gain_m()),
                unit: "m",
            });
        }
    }

    ListRow {
        id: workout.id(),
        kind,
        title: workout.label().to_string(),
        metrics,
    }
}
