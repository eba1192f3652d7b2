//! State counts, Shannon entropy and per-generation statistics.

use serde::{Deserialize, Serialize};

use super::{Cell, Grid};

/// Number of dead and live cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateCounts {
    pub dead: usize,
    pub alive: usize,
}

impl StateCounts {
    pub fn from_cells(cells: &[Cell]) -> Self {
        let alive = cells.iter().filter(|c| c.is_alive()).count();
        Self {
            dead: cells.len() - alive,
            alive,
        }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.dead + self.alive
    }
}

/// Shannon entropy in bits: H = -sum(p * log2(p)) over the nonzero states.
///
/// Output range: [0, 1]
/// - 0 for an empty count or a uniform grid (all dead or all alive)
/// - 1 when exactly half the cells are alive
pub fn shannon_entropy(counts: &StateCounts) -> f64 {
    let total = counts.total();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    [counts.dead, counts.alive]
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Simulation statistics for monitoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationStats {
    pub generation: u64,
    pub live_cells: usize,
    pub dead_cells: usize,
    /// Fraction of cells alive.
    pub density: f64,
    pub entropy: f64,
}

impl SimulationStats {
    /// Compute statistics from the grid.
    pub fn from_grid(grid: &Grid) -> Self {
        let counts = grid.state_counts();
        Self {
            generation: grid.generation(),
            live_cells: counts.alive,
            dead_cells: counts.dead,
            density: counts.alive as f64 / counts.total() as f64,
            entropy: shannon_entropy(&counts),
        }
    }
}
