//! Grid - owns the cells and drives synchronous generation updates.
//!
//! Each generation runs in two phases:
//!
//! 1. Compute: every cell's next state is staged in a separate buffer, reading
//!    only the current generation.
//! 2. Commit: the staged states overwrite the live cells.
//!
//! Updating in place would let later cells observe next-generation values of
//! neighbors that were already visited.

use std::borrow::Cow;

use log::{debug, trace};
use rand::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use super::{
    BoundaryMode, BoundaryResolver, Cell, CellState, GridError, Neighborhood, StateCounts,
    shannon_entropy,
};
use crate::schema::{Pattern, PatternCatalog, PatternSource, SimulationConfig};

/// A fixed-size Game of Life grid.
///
/// Cells are stored row-major: `[row * length + col]`.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Number of columns.
    length: usize,
    /// Number of rows.
    width: usize,
    seed: u64,
    resolver: BoundaryResolver,
    cells: Vec<Cell>,
    /// Staging buffer for the compute phase (reused each generation).
    next: Vec<CellState>,
    generation: u64,
}

impl Grid {
    /// Create a grid of `width` rows by `length` columns.
    ///
    /// With `pattern` set, the named catalog entry or the given pattern is
    /// loaded at the top-left corner. With `None`, every cell is filled
    /// independently at random from a generator seeded with `seed`, one draw
    /// per cell in row-major order.
    pub fn new(
        length: usize,
        width: usize,
        seed: u64,
        boundary: BoundaryMode,
        pattern: Option<PatternSource>,
    ) -> Result<Self, GridError> {
        Self::with_catalog(
            length,
            width,
            seed,
            boundary,
            pattern,
            PatternCatalog::builtin(),
        )
    }

    /// Like [`Grid::new`], resolving pattern names against `catalog`.
    pub fn with_catalog(
        length: usize,
        width: usize,
        seed: u64,
        boundary: BoundaryMode,
        pattern: Option<PatternSource>,
        catalog: &PatternCatalog,
    ) -> Result<Self, GridError> {
        if length == 0 || width == 0 {
            return Err(GridError::InvalidDimensions { length, width });
        }

        let states = match pattern {
            Some(source) => {
                let pattern = resolve_pattern(source, catalog)?;
                debug!(
                    "Loading pattern '{}' ({} live cells) into {}x{} grid",
                    pattern.name,
                    pattern.live_cells.len(),
                    width,
                    length
                );
                pattern.generate(length, width)
            }
            None => {
                debug!("Random fill of {}x{} grid with seed {}", width, length, seed);
                random_fill(length, width, seed)
            }
        };

        let cells = states
            .into_iter()
            .map(|alive| Cell::with_state(alive.into()))
            .collect();

        Ok(Self {
            length,
            width,
            seed,
            resolver: BoundaryResolver::new(boundary, width, length),
            cells,
            next: vec![CellState::Dead; width * length],
            generation: 0,
        })
    }

    /// Create a grid from a validated configuration.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, GridError> {
        config.validate()?;
        Self::new(
            config.length,
            config.width,
            config.seed,
            config.boundary,
            config.pattern.clone(),
        )
    }

    /// Advance the whole grid by one generation.
    pub fn advance_generation(&mut self) {
        // 1. Compute phase - reads only `cells`, writes only `next`
        let resolver = &self.resolver;
        let cells = &self.cells;
        let length = self.length;

        #[cfg(not(target_arch = "wasm32"))]
        {
            // Native: rows in parallel; for_each returns once every row is staged
            self.next
                .par_chunks_mut(length)
                .enumerate()
                .for_each(|(x, row)| compute_row(resolver, cells, x, row));
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.next
                .chunks_mut(length)
                .enumerate()
                .for_each(|(x, row)| compute_row(resolver, cells, x, row));
        }

        // 2. Commit phase
        for (cell, &state) in self.cells.iter_mut().zip(self.next.iter()) {
            cell.update_state(state);
        }

        self.generation += 1;
        trace!(
            "Generation {}: {} live cells",
            self.generation,
            self.live_count()
        );
    }

    /// Advance the grid by `generations` steps.
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance_generation();
        }
    }

    /// Copy of the current states, `width` rows of `length` values.
    pub fn snapshot(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.length)
            .map(|row| row.iter().map(|c| c.state().as_u8()).collect())
            .collect()
    }

    /// The eight neighbor states of `(x, y)` (row, column) under this grid's
    /// boundary mode, in row-major offset order.
    pub fn get_neighbors(&self, x: usize, y: usize) -> Result<Neighborhood, GridError> {
        if x >= self.width || y >= self.length {
            return Err(GridError::OutOfBounds { x, y });
        }
        Ok(self.resolver.neighbor_states(&self.cells, x, y))
    }

    /// Cell at row `x`, column `y`.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.length {
            self.cells.get(x * self.length + y)
        } else {
            None
        }
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn boundary_mode(&self) -> BoundaryMode {
        self.resolver.mode()
    }

    /// Number of generations advanced since construction.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn state_counts(&self) -> StateCounts {
        StateCounts::from_cells(&self.cells)
    }

    /// Shannon entropy (bits) of the dead/alive distribution.
    pub fn entropy(&self) -> f64 {
        shannon_entropy(&self.state_counts())
    }
}

/// Stage the next states of row `x` into `row`.
#[inline]
fn compute_row(resolver: &BoundaryResolver, cells: &[Cell], x: usize, row: &mut [CellState]) {
    let length = row.len();
    for (y, next) in row.iter_mut().enumerate() {
        let neighbors = resolver.neighbor_states(cells, x, y);
        *next = cells[x * length + y].compute_next_state(&neighbors);
    }
}

fn resolve_pattern(
    source: PatternSource,
    catalog: &PatternCatalog,
) -> Result<Cow<'_, Pattern>, GridError> {
    match source {
        PatternSource::Custom(pattern) => Ok(Cow::Owned(pattern)),
        PatternSource::Named(name) => match catalog.get(&name) {
            Some(pattern) => Ok(Cow::Borrowed(pattern)),
            None => Err(GridError::InvalidPattern {
                name,
                available: catalog.names(),
            }),
        },
    }
}

fn random_fill(length: usize, width: usize, seed: u64) -> Vec<bool> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..width * length).map(|_| rng.gen_bool(0.5)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(
        length: usize,
        width: usize,
        boundary: BoundaryMode,
        pattern: impl Into<PatternSource>,
    ) -> Grid {
        Grid::new(length, width, 42, boundary, Some(pattern.into())).unwrap()
    }

    fn live_set(grid: &Grid) -> Vec<(usize, usize)> {
        let snap = grid.snapshot();
        let mut cells = Vec::new();
        for (x, row) in snap.iter().enumerate() {
            for (y, &v) in row.iter().enumerate() {
                if v == 1 {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    fn states(bits: [u8; 8]) -> Neighborhood {
        bits.map(|b| CellState::try_from(b).unwrap())
    }

    /// Straightforward B3/S23 step on a torus, computed from a snapshot.
    fn reference_step(snap: &[Vec<u8>]) -> Vec<Vec<u8>> {
        let w = snap.len() as isize;
        let l = snap[0].len() as isize;
        let mut out = vec![vec![0u8; l as usize]; w as usize];
        for x in 0..w {
            for y in 0..l {
                let mut n = 0;
                for dx in -1..=1 {
                    for dy in -1..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        n += snap[(x + dx).rem_euclid(w) as usize][(y + dy).rem_euclid(l) as usize];
                    }
                }
                let cur = snap[x as usize][y as usize];
                out[x as usize][y as usize] = match n {
                    2 => cur,
                    3 => 1,
                    _ => 0,
                };
            }
        }
        out
    }

    #[test]
    fn test_init_random() {
        let grid = Grid::new(5, 4, 42, BoundaryMode::Periodic, None).unwrap();
        let snap = grid.snapshot();
        assert_eq!(snap.len(), 4);
        assert!(snap.iter().all(|row| row.len() == 5));
        assert!(snap.iter().flatten().all(|&v| v <= 1));
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.seed(), 42);
    }

    #[test]
    fn test_random_fill_is_reproducible() {
        let a = Grid::new(16, 16, 7, BoundaryMode::Periodic, None).unwrap();
        let b = Grid::new(16, 16, 7, BoundaryMode::Fixed, None).unwrap();
        let c = Grid::new(16, 16, 8, BoundaryMode::Periodic, None).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
        assert_ne!(a.snapshot(), c.snapshot());

        let live = a.live_count();
        assert!(live > 0 && live < 256);
    }

    #[test]
    fn test_init_pattern_name() {
        let grid = grid_with(5, 5, BoundaryMode::Periodic, "block");
        assert_eq!(live_set(&grid), vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_init_pattern_instance() {
        let pattern = Pattern::new("test", vec![(0, 0), (1, 1)]);
        let grid = grid_with(3, 3, BoundaryMode::Periodic, pattern);
        let snap = grid.snapshot();
        assert_eq!(snap[0][0], 1);
        assert_eq!(snap[1][1], 1);
        assert_eq!(snap.iter().flatten().filter(|&&v| v == 1).count(), 2);
    }

    #[test]
    fn test_pattern_clipped_to_grid() {
        // Glider gun is 10x37; only the part inside 6x20 survives
        let grid = grid_with(20, 6, BoundaryMode::Fixed, "glider_gun");
        let expected: Vec<(usize, usize)> = {
            let mut cells: Vec<_> = crate::schema::GLIDER_GUN
                .iter()
                .copied()
                .filter(|&(r, c)| r < 6 && c < 20)
                .collect();
            cells.sort();
            cells
        };
        assert_eq!(live_set(&grid), expected);
    }

    #[test]
    fn test_invalid_pattern_name() {
        let err = Grid::new(
            5,
            5,
            42,
            BoundaryMode::Periodic,
            Some("not_a_pattern".into()),
        )
        .unwrap_err();
        match err {
            GridError::InvalidPattern { name, available } => {
                assert_eq!(name, "not_a_pattern");
                assert!(available.contains(&"glider".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_custom_catalog() {
        let mut catalog = PatternCatalog::new();
        catalog.register(Pattern::new("dot", vec![(1, 1)]));

        let grid =
            Grid::with_catalog(3, 3, 0, BoundaryMode::Fixed, Some("dot".into()), &catalog)
                .unwrap();
        assert_eq!(live_set(&grid), vec![(1, 1)]);

        let missing =
            Grid::with_catalog(3, 3, 0, BoundaryMode::Fixed, Some("block".into()), &catalog);
        assert!(matches!(missing, Err(GridError::InvalidPattern { .. })));
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(matches!(
            Grid::new(0, 3, 42, BoundaryMode::Fixed, None),
            Err(GridError::InvalidDimensions {
                length: 0,
                width: 3
            })
        ));
    }

    #[test]
    fn test_from_config() {
        let config = SimulationConfig {
            length: 8,
            width: 6,
            boundary: BoundaryMode::Toroidal,
            pattern: Some("blinker".into()),
            ..Default::default()
        };
        let grid = Grid::from_config(&config).unwrap();
        assert_eq!((grid.width(), grid.length()), (6, 8));
        assert_eq!(grid.boundary_mode(), BoundaryMode::Toroidal);
        assert_eq!(grid.live_count(), 3);

        let bad = SimulationConfig {
            length: 0,
            ..Default::default()
        };
        assert!(matches!(
            Grid::from_config(&bad),
            Err(GridError::Config(_))
        ));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut grid = grid_with(5, 5, BoundaryMode::Periodic, "blinker");
        let mut snap = grid.snapshot();
        let before = snap.clone();

        snap[0][0] = 1;
        assert_eq!(grid.cell(0, 0).unwrap().state(), CellState::Dead);

        grid.advance_generation();
        assert_ne!(grid.snapshot(), before);
        assert_eq!(snap[1][0], 1);
    }

    #[test]
    fn test_block_is_still_life() {
        for (boundary, size) in [(BoundaryMode::Fixed, 4), (BoundaryMode::Periodic, 6)] {
            let mut grid = grid_with(size, size, boundary, "block");
            let before = grid.snapshot();
            grid.advance_generation();
            assert_eq!(grid.snapshot(), before);
            assert_eq!(grid.generation(), 1);
        }
    }

    #[test]
    fn test_blinker_period_two() {
        let mut grid = grid_with(5, 5, BoundaryMode::Periodic, "blinker");
        let initial = grid.snapshot();

        grid.advance_generation();
        assert_eq!(live_set(&grid), vec![(0, 1), (1, 1), (2, 1)]);

        grid.advance_generation();
        assert_eq!(grid.snapshot(), initial);
    }

    #[test]
    fn test_pulsar_period_three() {
        let mut grid = grid_with(20, 20, BoundaryMode::Periodic, "pulsar");
        let initial = grid.snapshot();

        grid.advance_generation();
        assert_ne!(grid.snapshot(), initial);
        grid.advance_generation();
        assert_ne!(grid.snapshot(), initial);
        grid.advance_generation();
        assert_eq!(grid.snapshot(), initial);
    }

    #[test]
    fn test_glider_translates() {
        let mut grid = grid_with(10, 10, BoundaryMode::Periodic, "glider");
        let initial = live_set(&grid);

        grid.run(4);
        let shifted: Vec<(usize, usize)> = initial.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
        assert_eq!(live_set(&grid), shifted);
    }

    #[test]
    fn test_glider_wraps_on_torus() {
        // 4 generations per cell, 40 generations around an 10x10 torus
        let mut grid = grid_with(10, 10, BoundaryMode::Toroidal, "glider");
        let initial = grid.snapshot();
        grid.run(40);
        assert_eq!(grid.snapshot(), initial);
    }

    #[test]
    fn test_glider_gun_emits() {
        let mut grid = grid_with(50, 50, BoundaryMode::Fixed, "glider_gun");
        grid.run(60);
        assert!(grid.live_count() > 36);
        assert!(live_set(&grid).iter().any(|&(r, _)| r >= 12));
    }

    #[test]
    fn test_matches_reference_step() {
        let mut grid = Grid::new(12, 9, 1234, BoundaryMode::Periodic, None).unwrap();
        let mut expected = grid.snapshot();
        for _ in 0..10 {
            expected = reference_step(&expected);
            grid.advance_generation();
            assert_eq!(grid.snapshot(), expected);
        }
    }

    #[test]
    fn test_periodic_and_toroidal_agree() {
        let mut periodic = Grid::new(16, 12, 99, BoundaryMode::Periodic, None).unwrap();
        let mut toroidal = Grid::new(16, 12, 99, BoundaryMode::Toroidal, None).unwrap();
        for _ in 0..20 {
            periodic.advance_generation();
            toroidal.advance_generation();
            assert_eq!(periodic.snapshot(), toroidal.snapshot());
        }
    }

    #[test]
    fn test_fixed_corner_neighbors() {
        let everything: Vec<(usize, usize)> =
            (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        let grid = grid_with(3, 3, BoundaryMode::Fixed, Pattern::new("full", everything));

        assert_eq!(
            grid.get_neighbors(0, 0).unwrap(),
            states([0, 0, 0, 0, 1, 0, 1, 1])
        );
        assert_eq!(
            grid.get_neighbors(2, 2).unwrap(),
            states([1, 1, 0, 1, 0, 0, 0, 0])
        );
        assert_eq!(grid.get_neighbors(1, 1).unwrap(), states([1; 8]));
    }

    #[test]
    fn test_periodic_corner_neighbors() {
        let pattern = Pattern::new("far", vec![(3, 4)]);
        for boundary in [BoundaryMode::Periodic, BoundaryMode::Toroidal] {
            let grid = grid_with(5, 4, boundary, pattern.clone());
            assert_eq!(
                grid.get_neighbors(0, 0).unwrap(),
                states([1, 0, 0, 0, 0, 0, 0, 0])
            );
        }
    }

    #[test]
    fn test_reflective_corner_neighbors() {
        // Clamping makes the corner see itself in the out-of-range slots
        let grid = grid_with(3, 3, BoundaryMode::Reflective, Pattern::new("c", vec![(0, 0)]));
        assert_eq!(
            grid.get_neighbors(0, 0).unwrap(),
            states([1, 1, 0, 1, 0, 0, 0, 0])
        );
    }

    #[test]
    fn test_neighbors_out_of_bounds() {
        let grid = Grid::new(3, 2, 42, BoundaryMode::Fixed, None).unwrap();
        assert!(grid.get_neighbors(1, 2).is_ok());
        assert!(matches!(
            grid.get_neighbors(2, 0),
            Err(GridError::OutOfBounds { x: 2, y: 0 })
        ));
        assert!(grid.cell(0, 3).is_none());
    }

    #[test]
    fn test_entropy_uniform_and_mixed() {
        let dead = grid_with(3, 3, BoundaryMode::Fixed, Pattern::new("dead", vec![]));
        assert_eq!(dead.entropy(), 0.0);

        let all: Vec<(usize, usize)> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        let alive = grid_with(3, 3, BoundaryMode::Fixed, Pattern::new("alive", all));
        assert_eq!(alive.entropy(), 0.0);

        let one = grid_with(3, 3, BoundaryMode::Fixed, Pattern::new("one", vec![(1, 1)]));
        assert!(one.entropy() > 0.0);
    }
}
