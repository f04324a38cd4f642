//! Generation engine: applies Conway's rules to a whole grid at once.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{LifeError, Result};
use crate::grid::{Cell, Dimensions, Grid};
use crate::neighbors::live_neighbors;

/// Decides the next state of one cell from its current state and its number
/// of live neighbours:
///
/// * Any live cell with fewer than two live neighbors dies (underpopulation)
/// * Any live cell with two or three live neighbors survives
/// * Any live cell with more than three live neighbors dies (overpopulation)
/// * Any dead cell with exactly three live neighbors becomes alive (reproduction)
#[inline]
pub fn next_state(cell: Cell, live_neighbors: u8) -> Cell {
    match (cell, live_neighbors) {
        (Cell::Alive, n) if n < 2 => Cell::Dead,
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
        (Cell::Alive, _) => Cell::Dead,
        (Cell::Dead, 3) => Cell::Alive,
        (Cell::Dead, _) => Cell::Dead,
    }
}

/// Computes the generation that follows `grid`.
///
/// Every cell is decided against the unmodified input and written to a fresh
/// buffer, so no cell observes another cell's next state. Rows are computed in
/// parallel; each worker only reads `grid` and only writes its own output row.
pub fn next_generation(grid: &Grid) -> Grid {
    let cells: Vec<Vec<Cell>> = (0..grid.rows())
        .into_par_iter()
        .map(|r| {
            grid.row(r)
                .iter()
                .enumerate()
                .map(|(c, &cell)| next_state(cell, live_neighbors(grid, r, c)))
                .collect()
        })
        .collect();
    Grid::from_parts(grid.dimensions(), cells)
}

/// Stores statistics about a simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Completed steps, incremented unconditionally
    pub generation_count: u64,
    /// Steps whose output differed from their input
    pub distinct_shape_count: u64,
    /// Total number of cells created since start
    pub cells_created: u64,
    /// Total number of cells destroyed since start
    pub cells_destroyed: u64,
}

/// Result of a single [`GenerationEngine::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// The next generation
    pub grid: Grid,
    /// Whether `grid` differs from the step's input
    pub changed: bool,
    pub generation_count: u64,
    pub distinct_shape_count: u64,
    /// Cells that were dead and are now alive
    pub births: usize,
    /// Cells that were alive and are now dead
    pub deaths: usize,
    /// Live cells in `grid`
    pub population: usize,
}

/// Advances grids of fixed dimensions and keeps the per-run counters.
///
/// Each engine owns its own counters, so independent simulations never share
/// state.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    dims: Dimensions,
    stats: SimulationStats,
}

impl GenerationEngine {
    /// Creates an engine for grids of `dims`, with all counters at zero.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            stats: SimulationStats::default(),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn stats(&self) -> SimulationStats {
        self.stats
    }

    pub fn generation_count(&self) -> u64 {
        self.stats.generation_count
    }

    pub fn distinct_shape_count(&self) -> u64 {
        self.stats.distinct_shape_count
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        self.stats = SimulationStats::default();
    }

    /// Advances `grid` by one generation and updates the counters.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::DimensionMismatch`] if `grid` is not of the
    /// engine's dimensions; the counters are left untouched in that case.
    pub fn step(&mut self, grid: &Grid) -> Result<StepOutcome> {
        if grid.dimensions() != self.dims {
            return Err(LifeError::DimensionMismatch {
                expected: self.dims,
                found: grid.dimensions().to_string(),
            });
        }

        let next = next_generation(grid);

        let (mut births, mut deaths) = (0, 0);
        for (before, after) in grid.iter_rows().zip(next.iter_rows()) {
            for (&b, &a) in before.iter().zip(after) {
                match (b, a) {
                    (Cell::Dead, Cell::Alive) => births += 1,
                    (Cell::Alive, Cell::Dead) => deaths += 1,
                    _ => {}
                }
            }
        }
        let changed = births + deaths > 0;
        trace!(births, deaths, "applied rules");

        self.stats.generation_count += 1;
        if changed {
            self.stats.distinct_shape_count += 1;
        }
        self.stats.cells_created += births as u64;
        self.stats.cells_destroyed += deaths as u64;

        let population = next.population();
        debug!(
            generation = self.stats.generation_count,
            distinct_shapes = self.stats.distinct_shape_count,
            changed,
            population,
            "stepped"
        );

        Ok(StepOutcome {
            grid: next,
            changed,
            generation_count: self.stats.generation_count,
            distinct_shape_count: self.stats.distinct_shape_count,
            births,
            deaths,
            population,
        })
    }
}
