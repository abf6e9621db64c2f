//! Error types for the file and config edges of the game.
//!
//! The simulation itself never fails; only reading levels and settings from
//! disk can.

use std::path::PathBuf;

use thiserror::Error;

/// Level loading errors
#[derive(Error, Debug)]
pub enum LevelError {
    /// The level file could not be read
    #[error("failed to read level file {}: {source}", .path.display())]
    Io {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The file parsed to zero usable rows
    #[error("level file {} contains no tile rows", .path.display())]
    Empty {
        /// Path that was requested
        path: PathBuf,
    },

    /// A bundled level index outside the available range
    #[error("no bundled level {index} (have {available})")]
    UnknownLevel {
        /// Requested index
        index: usize,
        /// Number of bundled levels
        available: usize,
    },
}

/// Settings loading/saving errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Settings file could not be read or written
    #[error("settings I/O failed for {}: {source}", .path.display())]
    Io {
        /// Path of the settings file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Settings JSON was malformed
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}
