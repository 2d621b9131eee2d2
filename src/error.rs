//! Error types for vecviz

use thiserror::Error;

/// Message shown to the user when a scalar length submission is rejected
pub const INVALID_LENGTH_MESSAGE: &str = "Enter a valid positive number for the vector length.";

/// Main error type for vecviz operations
#[derive(Debug, Error)]
pub enum VecvizError {
    /// A direction had zero or non-finite length and cannot be normalized
    #[error("Degenerate vector: length is zero or not finite")]
    DegenerateVector,

    /// Snap step must be strictly positive and finite
    #[error("Invalid snap step: {0}")]
    InvalidStep(f64),

    /// Scalar length input was not a positive finite number
    #[error("Invalid vector length: {0:?}")]
    InvalidLength(String),

    /// Host surface dimensions must be positive and finite
    #[error("Invalid surface size: {width} x {height}")]
    InvalidSurface { width: f64, height: f64 },

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VecvizError {
    /// Text the host should display for this error
    pub fn user_message(&self) -> String {
        match self {
            VecvizError::InvalidLength(_) => INVALID_LENGTH_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for vecviz operations
pub type Result<T> = std::result::Result<T, VecvizError>;
