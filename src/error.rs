//! Error types for Workout Flux

use thiserror::Error;

/// Errors that can occur while reading packages and computing summaries
#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("Unknown activity type: '{0}'")]
    UnknownActivityType(String),

    #[error("Wrong number of readings for {workout_type}: expected {expected}, got {actual}")]
    ArityMismatch {
        workout_type: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duration must be positive, got {0}")]
    InvalidDuration(f64),

    #[error("Invalid reading #{index} for {workout_type}: {reason}")]
    InvalidReading {
        workout_type: String,
        index: usize,
        reason: String,
    },

    #[error("Failed to parse package: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}
