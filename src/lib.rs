// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Mapfit-Tracker: record workouts against points on an interactive map.
//!
//! This crate provides the core of the tracker: the workout domain
//! model, the store/controller mediating between user input and
//! persisted state, and the codec that round-trips the collection
//! through durable local storage. The map, geolocation, and form
//! collaborators are external; embedders plug them in through the
//! traits in [`presentation`] and [`services::location`].

pub mod codec;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod presentation;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FileStore;
use error::Result;
use services::WorkoutStore;

/// Open the workout store over durable file storage per `config`.
///
/// Embedders call this once at startup and hand the store to a
/// [`presentation::Presenter`] along with their map, list, and location
/// collaborators.
pub fn open_store(config: &Config) -> Result<WorkoutStore> {
    let backend = FileStore::new(config.data_dir.clone())?;
    Ok(WorkoutStore::new(
        Box::new(backend),
        config.storage_key.clone(),
    ))
}
