//! Error types for animcam.

use thiserror::Error;

/// The main error type for animcam operations.
///
/// Animated values never fail; errors only come from building or loading
/// rig configuration.
#[derive(Error, Debug)]
pub enum AnimcamError {
    /// An option holds a value the rig cannot work with.
    #[error("invalid option '{name}': {reason}")]
    InvalidOption { name: &'static str, reason: String },

    /// A min/max option pair is inverted.
    #[error("invalid range for '{name}': min {min} is greater than max {max}")]
    InvalidRange {
        name: &'static str,
        min: f32,
        max: f32,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for animcam operations.
pub type Result<T> = std::result::Result<T, AnimcamError>;
