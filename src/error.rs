// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent user-facing messages.

use std::fmt;

/// Application error type covering every failure mode the core reports.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Location unavailable")]
    LocationUnavailable,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Message the presentation layer shows to the user.
    ///
    /// Storage and internal failures are logged here and reported
    /// generically; validation and location failures carry enough
    /// context to display as-is.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(err) => err.to_string(),
            AppError::LocationUnavailable => "Unable to get your location".to_string(),
            AppError::Storage(msg) => {
                tracing::error!(error = %msg, "Storage error");
                "Could not save your workouts".to_string()
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                "Something went wrong".to_string()
            }
        }
    }
}

/// User input failed the workout invariants.
///
/// Carries the names of every offending form field so the input surface
/// can point at all of them at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

impl ValidationError {
    pub fn new(fields: Vec<&'static str>) -> Self {
        Self { fields }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entries must be positive numbers: {}",
            self.fields.join(", ")
        )
    }
}

impl std::error::Error for ValidationError {}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, AppError>;
