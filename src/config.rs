//! Application configuration loaded from environment variables.
//!
//! Everything has a sensible default so an embedder can run with no
//! environment at all; the variables exist for development overrides.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the durable key-value records
    pub data_dir: PathBuf,
    /// Key the workout sequence is persisted under
    pub storage_key: String,
    /// Zoom level used when showing or centering the map
    pub map_zoom: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            storage_key: crate::db::keys::WORKOUTS.to_string(),
            map_zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

/// Leaflet-style zoom level the original UI uses for its map views.
const DEFAULT_MAP_ZOOM: u8 = 13;

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparseable variables fall back to the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            data_dir: env::var("WORKOUT_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            storage_key: env::var("WORKOUT_STORAGE_KEY")
                .unwrap_or_else(|_| crate::db::keys::WORKOUTS.to_string()),
            map_zoom: env::var("WORKOUT_MAP_ZOOM")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAP_ZOOM),
        }
    }
}
