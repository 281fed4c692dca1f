// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers and fake collaborators for integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use mapfit_tracker::db::{keys, MemoryStore};
use mapfit_tracker::models::Coordinates;
use mapfit_tracker::presentation::{ListRow, ListView, MapView, MarkerRequest};
use mapfit_tracker::services::WorkoutStore;

/// Initialize test logging once; respects RUST_LOG.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Store over a fresh in-memory backend, plus a handle onto the shared
/// records for inspecting what got persisted.
#[allow(dead_code)]
pub fn test_store() -> (WorkoutStore, MemoryStore) {
    let backend = MemoryStore::new();
    let store = WorkoutStore::new(Box::new(backend.clone()), keys::WORKOUTS);
    (store, backend)
}

#[allow(dead_code)]
pub fn london() -> Coordinates {
    Coordinates::new(51.5, -0.1)
}

/// What a map collaborator was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    Shown { center: Coordinates, zoom: u8 },
    Marker(MarkerRequest),
    Centered { coordinates: Coordinates, zoom: u8 },
}

/// Map fake that records every request.
#[derive(Debug, Clone, Default)]
pub struct RecordingMap {
    pub events: Rc<RefCell<Vec<MapEvent>>>,
}

impl MapView for RecordingMap {
    fn show_map(&mut self, center: Coordinates, zoom: u8) {
        self.events.borrow_mut().push(MapEvent::Shown { center, zoom });
    }

    fn add_marker(&mut self, marker: &MarkerRequest) {
        self.events.borrow_mut().push(MapEvent::Marker(marker.clone()));
    }

    fn center_on(&mut self, coordinates: Coordinates, zoom: u8) {
        self.events
            .borrow_mut()
            .push(MapEvent::Centered { coordinates, zoom });
    }
}

#[allow(dead_code)]
impl RecordingMap {
    pub fn markers(&self) -> Vec<MarkerRequest> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                MapEvent::Marker(marker) => Some(marker.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn shown(&self) -> bool {
        self.events
            .borrow()
            .iter()
            .any(|event| matches!(event, MapEvent::Shown { .. }))
    }
}

/// What a list collaborator was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    Row(ListRow),
    Cleared,
    Error(String),
}

/// List fake that records every request.
#[derive(Debug, Clone, Default)]
pub struct RecordingList {
    pub events: Rc<RefCell<Vec<ListEvent>>>,
}

impl ListView for RecordingList {
    fn add_row(&mut self, row: &ListRow) {
        self.events.borrow_mut().push(ListEvent::Row(row.clone()));
    }

    fn clear(&mut self) {
        self.events.borrow_mut().push(ListEvent::Cleared);
    }

    fn show_error(&mut self, message: &str) {
        self.events
            .borrow_mut()
            .push(ListEvent::Error(message.to_string()));
    }
}

#[allow(dead_code)]
impl RecordingList {
    pub fn rows(&self) -> Vec<ListRow> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ListEvent::Row(row) => Some(row.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ListEvent::Error(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}
