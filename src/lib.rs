//! Game of Life - Conway's cellular automaton on a bounded 2D grid.
//!
//! This crate provides a deterministic Game of Life engine with four boundary
//! topologies and a catalog of classic patterns.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration, pattern and catalog types
//! - `compute`: Cell rule, boundary resolution, grid evolution and statistics
//!
//! # Example
//!
//! ```rust
//! use game_of_life::{
//!     compute::{BoundaryMode, Grid},
//!     schema::PatternSource,
//! };
//!
//! // 5x5 torus with a blinker in the top-left corner
//! let mut grid = Grid::new(
//!     5,
//!     5,
//!     42,
//!     BoundaryMode::Periodic,
//!     Some(PatternSource::from("blinker")),
//! )
//! .unwrap();
//!
//! let initial = grid.snapshot();
//! grid.run(2);
//!
//! // Blinkers oscillate with period 2
//! assert_eq!(grid.snapshot(), initial);
//! println!("Entropy: {:.3} bits", grid.entropy());
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{BoundaryMode, Cell, CellState, Grid, GridError, SimulationStats};
pub use schema::{Pattern, PatternCatalog, PatternSource, SimulationConfig};
