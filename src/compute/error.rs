//! Error type for grid construction and queries.

use crate::schema::ConfigError;

/// Errors raised by the Game of Life engine.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("Cell state must be 0 or 1, got {0}")]
    InvalidState(u8),
    #[error(
        "Invalid pattern '{name}'. Must be a Pattern instance or a valid pattern name. \
         Available patterns: {}",
        .available.join(", ")
    )]
    InvalidPattern {
        name: String,
        available: Vec<String>,
    },
    #[error(
        "Unknown boundary mode '{0}' (expected fixed, periodic, reflective or toroidal)"
    )]
    UnknownBoundaryMode(String),
    #[error("Grid dimensions must be non-zero (length {length}, width {width})")]
    InvalidDimensions { length: usize, width: usize },
    #[error("Cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: usize, y: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
