// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Location acquisition boundary.
//!
//! The real position fix comes from hardware the core does not control
//! and may complete late or not at all. The core only ever sees the
//! one-shot outcome.

use crate::error::{AppError, Result};
use crate::models::Coordinates;

/// One-shot position fix from the external location service.
pub trait LocationService {
    /// Acquire the current position, or [`AppError::LocationUnavailable`]
    /// when the user declines or no hardware is present.
    fn current_position(&self) -> Result<Coordinates>;
}

/// Fixed-position service for tests and embeddings without hardware.
#[derive(Debug, Clone, Copy)]
pub struct StaticLocation(pub Coordinates);

impl LocationService for StaticLocation {
    fn current_position(&self) -> Result<Coordinates> {
        Ok(self.0)
    }
}

/// Service that always fails, modeling a denied or absent fix.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationService for NoLocation {
    fn current_position(&self) -> Result<Coordinates> {
        Err(AppError::LocationUnavailable)
    }
}
