//! Pattern types and the built-in pattern catalog.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// A named list of live cells, anchored at the grid's top-left corner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Pattern name.
    pub name: String,
    /// Live cell offsets as `(row, col)`.
    pub live_cells: Vec<(usize, usize)>,
}

impl Pattern {
    pub fn new(name: impl Into<String>, live_cells: Vec<(usize, usize)>) -> Self {
        Self {
            name: name.into(),
            live_cells,
        }
    }

    /// Smallest `(rows, cols)` grid that holds every live cell.
    pub fn extent(&self) -> (usize, usize) {
        self.live_cells
            .iter()
            .fold((0, 0), |(rows, cols), &(r, c)| (rows.max(r + 1), cols.max(c + 1)))
    }

    /// Row-major states for a `width` x `length` grid.
    ///
    /// Live cells that fall outside the grid are dropped.
    pub fn generate(&self, length: usize, width: usize) -> Vec<bool> {
        let mut grid = vec![false; width * length];
        for &(row, col) in &self.live_cells {
            if row < width && col < length {
                grid[row * length + col] = true;
            }
        }
        grid
    }
}

/// Where a grid takes its initial live cells from.
///
/// Deserializes from either a catalog name (`"glider"`) or an inline
/// pattern object (`{"name": "...", "live_cells": [[0, 1], ...]}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternSource {
    /// Look up a pattern in the built-in catalog.
    Named(String),
    /// Use the given pattern directly.
    Custom(Pattern),
}

impl From<&str> for PatternSource {
    fn from(name: &str) -> Self {
        PatternSource::Named(name.to_string())
    }
}

impl From<Pattern> for PatternSource {
    fn from(pattern: Pattern) -> Self {
        PatternSource::Custom(pattern)
    }
}

/// 2x2 still life.
pub const BLOCK: &[(usize, usize)] = &[(1, 1), (1, 2), (2, 1), (2, 2)];

/// Period-2 oscillator.
pub const BLINKER: &[(usize, usize)] = &[(1, 0), (1, 1), (1, 2)];

/// Period-3 oscillator.
#[rustfmt::skip]
pub const PULSAR: &[(usize, usize)] = &[
    (2, 4), (2, 5), (2, 6), (2, 10), (2, 11), (2, 12),
    (4, 2), (5, 2), (6, 2), (4, 7), (5, 7), (6, 7),
    (4, 9), (5, 9), (6, 9), (4, 14), (5, 14), (6, 14),
    (7, 4), (7, 5), (7, 6), (7, 10), (7, 11), (7, 12),
    (9, 4), (9, 5), (9, 6), (9, 10), (9, 11), (9, 12),
    (10, 2), (11, 2), (12, 2), (10, 7), (11, 7), (12, 7),
    (10, 9), (11, 9), (12, 9), (10, 14), (11, 14), (12, 14),
    (14, 4), (14, 5), (14, 6), (14, 10), (14, 11), (14, 12),
];

/// Spaceship moving one cell diagonally (down and right) every 4 generations.
pub const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// Gosper glider gun, emits a glider every 30 generations.
#[rustfmt::skip]
pub const GLIDER_GUN: &[(usize, usize)] = &[
    (5, 1), (5, 2), (6, 1), (6, 2),
    (5, 11), (6, 11), (7, 11),
    (4, 12), (8, 12),
    (3, 13), (9, 13),
    (3, 14), (9, 14),
    (6, 15),
    (4, 16), (8, 16),
    (5, 17), (6, 17), (7, 17),
    (6, 18),
    (3, 21), (4, 21), (5, 21),
    (3, 22), (4, 22), (5, 22),
    (2, 23), (6, 23),
    (1, 25), (2, 25), (6, 25), (7, 25),
    (3, 35), (4, 35),
    (3, 36), (4, 36),
];

const BUILTIN_PATTERNS: [(&str, &[(usize, usize)]); 5] = [
    ("block", BLOCK),
    ("blinker", BLINKER),
    ("pulsar", PULSAR),
    ("glider", GLIDER),
    ("glider_gun", GLIDER_GUN),
];

/// Name-indexed collection of patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternCatalog {
    patterns: BTreeMap<String, Pattern>,
}

impl PatternCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared catalog of built-in patterns, built on first use.
    pub fn builtin() -> &'static PatternCatalog {
        static CATALOG: OnceLock<PatternCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            let mut catalog = PatternCatalog::new();
            for (name, cells) in BUILTIN_PATTERNS {
                catalog.register(Pattern::new(name, cells.to_vec()));
            }
            catalog
        })
    }

    /// Add a pattern, replacing any existing entry of the same name.
    pub fn register(&mut self, pattern: Pattern) -> Option<Pattern> {
        self.patterns.insert(pattern.name.clone(), pattern)
    }

    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.patterns.contains_key(name)
    }

    /// Pattern names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.patterns.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.values()
    }
}
