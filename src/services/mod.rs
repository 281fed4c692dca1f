// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod location;
pub mod store;

pub use location::{LocationService, NoLocation, StaticLocation};
pub use store::WorkoutStore;
