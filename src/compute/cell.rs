//! Cell state and the Conway transition rule.

use serde::{Deserialize, Serialize};

use super::GridError;

/// Binary cell state. Only 0 (dead) and 1 (alive) are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum CellState {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl CellState {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<bool> for CellState {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl From<CellState> for u8 {
    #[inline]
    fn from(state: CellState) -> Self {
        state.as_u8()
    }
}

impl TryFrom<u8> for CellState {
    type Error = GridError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(CellState::Dead),
            1 => Ok(CellState::Alive),
            other => Err(GridError::InvalidState(other)),
        }
    }
}

/// The eight neighbor states of a cell, in row-major offset order.
pub type Neighborhood = [CellState; 8];

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    state: CellState,
}

impl Cell {
    /// Create a cell from a raw state value.
    ///
    /// Fails with [`GridError::InvalidState`] unless `initial_state` is 0 or 1.
    pub fn new(initial_state: u8) -> Result<Self, GridError> {
        Ok(Self::with_state(CellState::try_from(initial_state)?))
    }

    #[inline]
    pub fn with_state(state: CellState) -> Self {
        Self { state }
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    /// Next state under B3/S23 given the current neighborhood.
    ///
    /// - fewer than 2 live neighbors: dead
    /// - exactly 2: unchanged
    /// - exactly 3: alive
    /// - more than 3: dead
    #[inline]
    pub fn compute_next_state(&self, neighbors: &Neighborhood) -> CellState {
        match live_neighbors(neighbors) {
            2 => self.state,
            3 => CellState::Alive,
            _ => CellState::Dead,
        }
    }

    #[inline]
    pub fn update_state(&mut self, new_state: CellState) {
        self.state = new_state;
    }

    /// Compute and apply the next state in one step.
    pub fn update_cell(&mut self, neighbors: &Neighborhood) {
        let next = self.compute_next_state(neighbors);
        self.update_state(next);
    }
}

/// Number of live cells in a neighborhood.
#[inline]
pub fn live_neighbors(neighbors: &Neighborhood) -> usize {
    neighbors.iter().filter(|s| s.is_alive()).count()
}
