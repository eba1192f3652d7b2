//! Schema module - Configuration and pattern types for Game of Life simulations.

mod config;
mod pattern;

pub use config::*;
pub use pattern::*;
