//! Durable storage layer (local key-value records).

pub mod local;

pub use local::{FileStore, MemoryStore};

use crate::error::Result;

/// Storage keys as constants.
pub mod keys {
    /// The whole workout sequence, serialized as one blob
    pub const WORKOUTS: &str = "workouts";
}

/// Durable key-value boundary: one key holds one serialized text blob.
///
/// The whole sequence is the unit of persistence. There are no partial
/// or incremental writes, and an absent or unreadable record is a normal
/// outcome, not an error.
pub trait StorageBackend {
    /// Read the blob stored under `key`, or `None` if absent/unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Replace the blob stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the record under `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<()>;
}
