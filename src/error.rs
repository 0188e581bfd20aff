//! Error types for ledwall-planner.
//!
//! Planning errors are always input rejections: no partial result is ever
//! returned alongside them. Lookup tables that run out of entries are not
//! errors; they saturate and set an `at_ceiling` flag instead.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for planning operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors raised when a planning request is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// A wall dimension was zero, negative or not a finite number.
    #[error("invalid {name}: {value} mm (must be a positive number)")]
    InvalidDimension {
        /// Which dimension was rejected ("width" or "height").
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The requested pixel pitch is not in the supported list.
    #[error("unsupported pixel pitch: {pitch} mm (supported: {supported})")]
    UnsupportedPitch {
        /// The rejected pitch.
        pitch: f64,
        /// Comma-separated list of supported pitches.
        supported: String,
    },

    /// The installation environment was not recognised.
    #[error("unknown environment '{value}' (expected 'indoor' or 'outdoor')")]
    UnknownEnvironment {
        /// The rejected value.
        value: String,
    },

    /// The wall is so large that its cabinet or pixel count does not fit in
    /// an integer.
    #[error("wall of {width_mm} x {height_mm} mm exceeds the countable cabinet or pixel range")]
    WallTooLarge {
        /// The requested width.
        width_mm: f64,
        /// The requested height.
        height_mm: f64,
    },

    /// Items cannot be distributed across zero groups.
    #[error("cannot distribute {items} items across zero groups")]
    EmptyGroupCount {
        /// Number of items that were to be distributed.
        items: usize,
    },
}
