//! Error types for Flexrow.
//!
//! The layout pass itself never fails. These cover the surfaces around it:
//! option validation and loading, and item-list editing.

use thiserror::Error;

/// Top-level error type for Flexrow.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Container(#[from] ContainerError),
}

/// Errors while validating or loading layout options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Option {field} is not a finite number")]
    NonFinite { field: &'static str },

    #[error("Option {field} must not be negative, found {value}")]
    Negative { field: &'static str, value: f64 },

    #[cfg(feature = "serde")]
    #[error("Invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors while editing a container's item list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContainerError {
    #[error("Index {index} out of bounds for {len} items")]
    IndexOutOfBounds { index: usize, len: usize },
}
