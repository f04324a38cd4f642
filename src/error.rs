//! Errors reported by the grid and the generation engine.

use thiserror::Error;

use crate::grid::Dimensions;

/// All kinds of errors in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    /// A coordinate addressed a cell outside the grid.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// A grid's shape does not match the shape it is used with.
    #[error("grid shape mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        expected: Dimensions,
        found: String,
    },
    /// A grid must have at least one row and one column.
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },
    /// A random fill density outside `0.0..=1.0`, or NaN.
    #[error("density must be a probability within 0.0..=1.0, got {density}")]
    InvalidDensity { density: f64 },
    /// Text that should describe a grid size or a pattern could not be parsed.
    #[error("invalid {what}: {input:?}")]
    Parse { what: &'static str, input: String },
}

pub type Result<T> = std::result::Result<T, LifeError>;
