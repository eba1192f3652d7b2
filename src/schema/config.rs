//! Configuration types for Game of Life simulations.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::PatternSource;
use crate::compute::BoundaryMode;

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of columns.
    pub length: usize,
    /// Number of rows.
    pub width: usize,
    /// Seed for the random initial fill (ignored when a pattern is given).
    pub seed: u64,
    /// Edge topology.
    pub boundary: BoundaryMode,
    /// Initial pattern. `None` fills the grid randomly.
    pub pattern: Option<PatternSource>,
    /// Number of generations to run.
    pub generations: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            length: 64,
            width: 64,
            seed: 42,
            boundary: BoundaryMode::Periodic,
            pattern: None,
            generations: 10,
        }
    }
}

impl SimulationConfig {
    /// Total number of cells.
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.width * self.length
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.length == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        Ok(())
    }

    /// Read and validate a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: SimulationConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (length, width) must be non-zero")]
    InvalidDimensions,
    #[error("Error reading config file: {0}")]
    Io(#[from] io::Error),
    #[error("Error parsing config: {0}")]
    Parse(#[from] serde_json::Error),
}
