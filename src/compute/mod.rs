//! Compute module - Cell rule, boundary handling and grid evolution.

mod boundary;
mod cell;
mod error;
mod grid;
mod stats;

pub use boundary::*;
pub use cell::*;
pub use error::*;
pub use grid::*;
pub use stats::*;
