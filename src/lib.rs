//! # Bounded Life
//!
//! Conway's Game of Life on a fixed-size grid whose edges do not wrap.
//!
//! ## Features
//!
//! * Boundary-aware neighbour counting (corners have 3 neighbours, edges 5)
//! * Simultaneous-update generation engine with per-run counters
//! * Pattern placement with explicit bounds checking
//! * Terminal driver built on `ratatui` and `crossterm`
//!
//! ```
//! use bounded_life::{apply_pattern, GenerationEngine, Grid, Pattern};
//!
//! let grid = Grid::new(10, 10)?;
//! let grid = apply_pattern(&grid, &Pattern::glider())?;
//! let mut engine = GenerationEngine::new(grid.dimensions());
//! let outcome = engine.step(&grid)?;
//! assert!(outcome.changed);
//! assert_eq!(outcome.generation_count, 1);
//! # Ok::<(), bounded_life::LifeError>(())
//! ```

pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod pattern;
pub mod ui;

pub use engine::{next_generation, next_state, GenerationEngine, SimulationStats, StepOutcome};
pub use error::{LifeError, Result};
pub use grid::{Cell, Coord, Dimensions, Grid};
pub use neighbors::count_live_neighbors;
pub use pattern::{apply_pattern, Pattern};

/// Creates a grid of `rows` x `cols` dead cells.
pub fn initialize_grid(rows: usize, cols: usize) -> Result<Grid> {
    Grid::new(rows, cols)
}
