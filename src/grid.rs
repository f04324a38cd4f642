//! Fixed-size, bounded grid of cells.
//!
//! Cells are addressed as `(row, col)` with the origin in the top-left corner.
//! The grid never wraps: positions outside `[0, rows) x [0, cols)` do not exist.

use std::fmt;
use std::str::FromStr;

use crate::error::{LifeError, Result};

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    /// Returns `true` for a live cell.
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// A `(row, col)` cell coordinate.
pub type Coord = (usize, usize);

/// Height and width of a grid.
///
/// Always at least 1x1; build one with [`Dimensions::new`] or by parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    pub const DEFAULT_ROWS: usize = 10;
    pub const DEFAULT_COLS: usize = 10;

    /// Creates dimensions, rejecting a grid with no cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::EmptyGrid { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if `(row, col)` addresses a cell inside these dimensions.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Fails with [`LifeError::OutOfRange`] unless `(row, col)` is inside.
    pub fn check(&self, row: usize, col: usize) -> Result<()> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(LifeError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
            cols: Self::DEFAULT_COLS,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Parses `ROWSxCOLS`, e.g. `10x10` or `24X40`.
impl FromStr for Dimensions {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        let parse_error = || LifeError::Parse {
            what: "grid size",
            input: s.to_owned(),
        };
        let (rows, cols) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(parse_error)?;
        let rows = rows.trim().parse::<usize>().map_err(|_| parse_error())?;
        let cols = cols.trim().parse::<usize>().map_err(|_| parse_error())?;
        Self::new(rows, cols)
    }
}

/// The game board: `rows` rows of exactly `cols` cells each.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of rows
    /// * `cols` - Number of columns
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::EmptyGrid`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self::dead(Dimensions::new(rows, cols)?))
    }

    /// Creates an all-dead grid of the given dimensions.
    pub fn dead(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![vec![Cell::Dead; dims.cols]; dims.rows],
        }
    }

    /// Builds a grid from a row-major matrix of cells.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::EmptyGrid`] for an empty matrix and
    /// [`LifeError::DimensionMismatch`] if the rows are not all the same length.
    pub fn from_rows(cells: Vec<Vec<Cell>>) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        let dims = Dimensions::new(rows, cols)?;
        if let Some((index, row)) = cells.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(LifeError::DimensionMismatch {
                expected: dims,
                found: format!("row {} with {} cells", index, row.len()),
            });
        }
        Ok(Self { dims, cells })
    }

    /// Builds an all-dead grid and marks the given coordinates alive.
    pub fn with_live_cells(dims: Dimensions, live: &[Coord]) -> Result<Self> {
        let mut grid = Self::dead(dims);
        for &(row, col) in live {
            grid.set(row, col, Cell::Alive)?;
        }
        Ok(grid)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// Returns the cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns `true` if `(row, col)` is inside the grid and alive.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Sets the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::OutOfRange`] if the coordinate is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        self.dims.check(row, col)?;
        self.cells[row][col] = cell;
        Ok(())
    }

    /// Iterates over the rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Counts the total number of living cells in the grid.
    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_alive())
            .count()
    }

    /// Coordinates of every live cell in row-major order.
    pub fn live_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.is_alive())
                    .map(move |(c, _)| (r, c))
            })
            .collect()
    }

    pub(crate) fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row]
    }

    pub(crate) fn from_parts(dims: Dimensions, cells: Vec<Vec<Cell>>) -> Self {
        debug_assert_eq!(cells.len(), dims.rows);
        debug_assert!(cells.iter().all(|r| r.len() == dims.cols));
        Self { dims, cells }
    }
}

/// Renders live cells as `#` and dead cells as `.`, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
