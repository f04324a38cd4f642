//! Command-line configuration for the terminal driver.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::SeedableRng;

use crate::error::Result;
use crate::grid::{Dimensions, Grid};
use crate::pattern::{apply_pattern, Pattern};

pub const DEFAULT_GENERATIONS: u64 = 5;
pub const DEFAULT_TICK_MS: u64 = 500;
pub const DEFAULT_CELL_WIDTH: u16 = 2;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Conway's Game of Life on a bounded grid", long_about = None)]
pub struct CliArgs {
    /// Grid dimensions expressed as ROWSxCOLS (for example 10x10).
    #[arg(short = 's', long = "size", value_name = "ROWSxCOLS", default_value = "10x10")]
    pub size: Dimensions,
    /// Live cells as `row,col` pairs separated by `;`. Defaults to a glider.
    #[arg(short = 'c', long = "cells", value_name = "CELLS", conflicts_with = "random")]
    pub cells: Option<Pattern>,
    /// Start from a random soup where each cell is alive with this probability.
    #[arg(long, value_name = "DENSITY", value_parser = parse_density)]
    pub random: Option<f64>,
    /// Seed for `--random`; a fresh seed is drawn when omitted.
    #[arg(long, value_name = "SEED", requires = "random")]
    pub seed: Option<u64>,
    /// Number of generations to run; 0 runs until quit.
    #[arg(short = 'g', long, value_name = "COUNT", default_value_t = DEFAULT_GENERATIONS)]
    pub generations: u64,
    /// Milliseconds between generations while auto-advancing.
    #[arg(
        long = "tick-ms",
        value_name = "MILLISECONDS",
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(10..=60_000)
    )]
    pub tick_ms: u64,
    /// Characters used to draw each cell horizontally.
    #[arg(
        long = "cell-width",
        value_name = "CHARS",
        default_value_t = DEFAULT_CELL_WIDTH,
        value_parser = clap::value_parser!(u16).range(1..=4)
    )]
    pub cell_width: u16,
    /// Print generations to stdout instead of drawing the terminal interface.
    #[arg(long)]
    pub headless: bool,
    /// Write logs to this file (filtered by RUST_LOG).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Accepts a probability: a finite number within `0.0..=1.0`.
fn parse_density(s: &str) -> std::result::Result<f64, String> {
    let density: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{s}` is not a number"))?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(format!("{density} is not within 0.0..=1.0"))
    }
}

/// Fully resolved settings for one simulation run.
#[derive(Debug, Clone)]
pub struct Config {
    pub initial: Grid,
    pub generation_limit: Option<u64>,
    pub tick: Duration,
    pub cell_width: u16,
    pub headless: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Builds the initial grid and the driver settings from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::OutOfRange`](crate::LifeError::OutOfRange) if a
    /// `--cells` coordinate does not fit the grid, and
    /// [`LifeError::InvalidDensity`](crate::LifeError::InvalidDensity) for a
    /// density that bypassed argument parsing.
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let pattern = match (args.cells, args.random) {
            (Some(cells), _) => cells,
            (None, Some(density)) => {
                let mut rng = match args.seed {
                    Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
                    None => rand::rngs::StdRng::from_entropy(),
                };
                Pattern::random(args.size, density, &mut rng)?
            }
            (None, None) => Pattern::glider(),
        };
        let initial = apply_pattern(&Grid::dead(args.size), &pattern)?;

        Ok(Self {
            initial,
            generation_limit: (args.generations > 0).then_some(args.generations),
            tick: Duration::from_millis(args.tick_ms),
            cell_width: args.cell_width,
            headless: args.headless,
            log_file: args.log_file,
        })
    }
}
