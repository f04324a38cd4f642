//! Driver state shared by the interactive and headless front ends.
//!
//! The driver owns the current grid between steps and decides when to ask the
//! engine for the next generation; the engine itself knows nothing of time.

use std::time::Duration;

use sysinfo::{System, SystemExt};
use tracing::info;

use crate::config::Config;
use crate::engine::{GenerationEngine, SimulationStats, StepOutcome};
use crate::error::Result;
use crate::grid::Grid;

/// Main application state container for a simulation run.
#[derive(Debug)]
pub struct App {
    /// The grid currently on display
    grid: Grid,
    /// Grid the run started from, kept for restarts
    initial: Grid,
    engine: GenerationEngine,
    /// Outcome of the most recent step, if any
    last: Option<StepOutcome>,
    /// Stop after this many generations
    generation_limit: Option<u64>,
    /// Indicates whether generations advance on every tick
    running: bool,
    tick: Duration,
    cell_width: u16,
    /// System information for resource monitoring
    sys: System,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        Self {
            grid: config.initial.clone(),
            initial: config.initial.clone(),
            engine: GenerationEngine::new(config.initial.dimensions()),
            last: None,
            generation_limit: config.generation_limit,
            running: false,
            tick: config.tick,
            cell_width: config.cell_width,
            sys,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stats(&self) -> SimulationStats {
        self.engine.stats()
    }

    pub fn last_outcome(&self) -> Option<&StepOutcome> {
        self.last.as_ref()
    }

    pub fn generation_limit(&self) -> Option<u64> {
        self.generation_limit
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn cell_width(&self) -> u16 {
        self.cell_width
    }

    pub fn system(&self) -> &System {
        &self.sys
    }

    /// Returns `true` once the configured number of generations has run.
    pub fn is_finished(&self) -> bool {
        self.generation_limit
            .is_some_and(|limit| self.engine.generation_count() >= limit)
    }

    /// Advances one generation unless the run is finished.
    ///
    /// # Returns
    ///
    /// `true` if a generation was computed.
    pub fn advance(&mut self) -> Result<bool> {
        if self.is_finished() {
            self.running = false;
            return Ok(false);
        }

        let outcome = self.engine.step(&self.grid)?;
        self.grid = outcome.grid.clone();
        self.last = Some(outcome);
        self.sys.refresh_memory();

        if self.is_finished() {
            self.running = false;
            let stats = self.engine.stats();
            info!(
                generations = stats.generation_count,
                distinct_shapes = stats.distinct_shape_count,
                "run finished"
            );
        }
        Ok(true)
    }

    /// Toggles between automatic advancement and waiting for the user.
    pub fn toggle_running(&mut self) {
        self.running = !self.running && !self.is_finished();
    }

    /// Returns to the initial grid with every counter at zero.
    pub fn restart(&mut self) {
        self.grid = self.initial.clone();
        self.engine.reset();
        self.last = None;
        self.running = false;
    }

    /// One-line summary of the run, shown above the grid.
    pub fn caption(&self) -> String {
        let stats = self.engine.stats();
        format!(
            "SHAPES={}  GENERATIONS={}",
            stats.distinct_shape_count, stats.generation_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Dimensions;
    use crate::pattern::{apply_pattern, Pattern};

    fn config(pattern: Pattern, limit: Option<u64>) -> Config {
        let initial = apply_pattern(&Grid::dead(Dimensions::default()), &pattern).unwrap();
        Config {
            initial,
            generation_limit: limit,
            tick: Duration::from_millis(100),
            cell_width: 2,
            headless: true,
            log_file: None,
        }
    }

    #[test]
    fn advance_stops_at_the_limit() {
        let mut app = App::new(&config(Pattern::glider(), Some(3)));
        for _ in 0..3 {
            assert!(app.advance().unwrap());
        }
        assert!(app.is_finished());
        assert!(!app.advance().unwrap());
        assert_eq!(app.stats().generation_count, 3);
        assert_eq!(app.caption(), "SHAPES=3  GENERATIONS=3");
    }

    #[test]
    fn running_cannot_resume_after_finish() {
        let mut app = App::new(&config(Pattern::glider(), Some(1)));
        app.toggle_running();
        assert!(app.is_running());
        app.advance().unwrap();
        assert!(!app.is_running());
        app.toggle_running();
        assert!(!app.is_running());
    }

    #[test]
    fn unlimited_runs_keep_going() {
        let mut app = App::new(&config(Pattern::new([(4, 4), (4, 5), (5, 4), (5, 5)]), None));
        for _ in 0..20 {
            assert!(app.advance().unwrap());
        }
        assert_eq!(app.stats().generation_count, 20);
        assert_eq!(app.stats().distinct_shape_count, 0);
        assert!(!app.last_outcome().unwrap().changed);
    }

    #[test]
    fn restart_returns_to_initial_grid() {
        let mut app = App::new(&config(Pattern::glider(), Some(5)));
        let initial = app.grid().clone();
        app.advance().unwrap();
        assert_ne!(app.grid(), &initial);
        app.restart();
        assert_eq!(app.grid(), &initial);
        assert_eq!(app.stats(), SimulationStats::default());
        assert!(app.last_outcome().is_none());
    }
}
