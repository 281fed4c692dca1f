// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod geo;
pub mod workout;

pub use geo::Coordinates;
pub use workout::{Ride, Run, Workout, WorkoutId, WorkoutKind};
