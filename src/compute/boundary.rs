//! Boundary handling for neighbor lookup.
//!
//! Maps a cell coordinate plus an offset to the neighbor it reads from, under
//! one of four edge topologies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Cell, CellState, GridError, Neighborhood};

/// Moore neighborhood offsets `(d_row, d_col)` in row-major order.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Edge topology of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Cells beyond the edge are permanently dead.
    Fixed,
    /// Coordinates wrap on both axes.
    #[default]
    Periodic,
    /// Coordinates clamp to the nearest edge cell.
    Reflective,
    /// Same wrap-around as `Periodic`; kept as a separate name for callers using it.
    Toroidal,
}

impl BoundaryMode {
    pub const ALL: [BoundaryMode; 4] = [
        BoundaryMode::Fixed,
        BoundaryMode::Periodic,
        BoundaryMode::Reflective,
        BoundaryMode::Toroidal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BoundaryMode::Fixed => "fixed",
            BoundaryMode::Periodic => "periodic",
            BoundaryMode::Reflective => "reflective",
            BoundaryMode::Toroidal => "toroidal",
        }
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundaryMode {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoundaryMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| GridError::UnknownBoundaryMode(s.to_string()))
    }
}

/// Resolves neighbor coordinates for a grid of fixed dimensions.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryResolver {
    mode: BoundaryMode,
    /// Number of rows.
    width: usize,
    /// Number of columns.
    length: usize,
}

impl BoundaryResolver {
    pub fn new(mode: BoundaryMode, width: usize, length: usize) -> Self {
        Self {
            mode,
            width,
            length,
        }
    }

    #[inline]
    pub fn mode(&self) -> BoundaryMode {
        self.mode
    }

    /// Coordinate of the neighbor at `(x + dx, y + dy)`.
    ///
    /// Returns `None` when the neighbor lies beyond a fixed boundary.
    #[inline]
    pub fn resolve(&self, x: usize, y: usize, dx: isize, dy: isize) -> Option<(usize, usize)> {
        let nx = x as isize + dx;
        let ny = y as isize + dy;
        match self.mode {
            BoundaryMode::Fixed => {
                let in_rows = (0..self.width as isize).contains(&nx);
                let in_cols = (0..self.length as isize).contains(&ny);
                (in_rows && in_cols).then_some((nx as usize, ny as usize))
            }
            BoundaryMode::Periodic | BoundaryMode::Toroidal => Some((
                nx.rem_euclid(self.width as isize) as usize,
                ny.rem_euclid(self.length as isize) as usize,
            )),
            BoundaryMode::Reflective => Some((
                nx.clamp(0, self.width as isize - 1) as usize,
                ny.clamp(0, self.length as isize - 1) as usize,
            )),
        }
    }

    /// The eight neighbor states of `(x, y)` read from row-major `cells`.
    ///
    /// Fixed-boundary sentinels read as dead.
    #[inline]
    pub fn neighbor_states(&self, cells: &[Cell], x: usize, y: usize) -> Neighborhood {
        NEIGHBOR_OFFSETS.map(|(dx, dy)| match self.resolve(x, y, dx, dy) {
            Some((nx, ny)) => cells[nx * self.length + ny].state(),
            None => CellState::Dead,
        })
    }
}
