//! Initial configurations: sets of cells that start alive.

use std::collections::BTreeSet;
use std::str::FromStr;

use rand::Rng;

use crate::error::{LifeError, Result};
use crate::grid::{Cell, Coord, Dimensions, Grid};

/// A finite set of `(row, col)` coordinates that start alive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    cells: BTreeSet<Coord>,
}

impl Pattern {
    pub fn new<I: IntoIterator<Item = Coord>>(cells: I) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// The glider the simulation starts with by default, heading towards the
    /// bottom-right corner of a 10x10 board.
    pub fn glider() -> Self {
        Self::new([(2, 1), (3, 2), (3, 3), (2, 3), (1, 3)])
    }

    /// Random soup: every cell of `dims` is alive with probability `density`.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::InvalidDensity`] unless `density` is within
    /// `0.0..=1.0` (NaN included).
    pub fn random<R: Rng + ?Sized>(dims: Dimensions, density: f64, rng: &mut R) -> Result<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::InvalidDensity { density });
        }
        let mut cells = BTreeSet::new();
        for row in 0..dims.rows() {
            for col in 0..dims.cols() {
                if rng.gen_bool(density) {
                    cells.insert((row, col));
                }
            }
        }
        Ok(Self { cells })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }
}

impl FromIterator<Coord> for Pattern {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Parses `row,col` pairs separated by `;`, e.g. `1,0;2,1;2,2`.
impl FromStr for Pattern {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        s.split(';')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .map(|pair| -> Result<Coord> {
                let parse_error = || LifeError::Parse {
                    what: "cell coordinate",
                    input: pair.to_owned(),
                };
                let (row, col) = pair.split_once(',').ok_or_else(parse_error)?;
                let row = row.trim().parse::<usize>().map_err(|_| parse_error())?;
                let col = col.trim().parse::<usize>().map_err(|_| parse_error())?;
                Ok((row, col))
            })
            .collect()
    }
}

/// Returns a copy of `grid` with every coordinate of `pattern` set alive.
///
/// The whole pattern is validated before any cell is touched, so on error the
/// caller's grid is left exactly as it was.
///
/// # Errors
///
/// Returns [`LifeError::OutOfRange`] for the first coordinate (in row-major
/// order) that lies outside the grid.
pub fn apply_pattern(grid: &Grid, pattern: &Pattern) -> Result<Grid> {
    let dims = grid.dimensions();
    for (row, col) in pattern.iter() {
        dims.check(row, col)?;
    }

    let mut next = grid.clone();
    for (row, col) in pattern.iter() {
        next.set(row, col, Cell::Alive)?;
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn apply_marks_cells_alive() {
        let grid = Grid::new(10, 10).unwrap();
        let next = apply_pattern(&grid, &Pattern::glider()).unwrap();
        assert_eq!(next.population(), 5);
        assert!(next.is_alive(1, 3));
        assert!(next.is_alive(3, 2));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn apply_keeps_existing_live_cells() {
        let dims = Dimensions::new(4, 4).unwrap();
        let grid = Grid::with_live_cells(dims, &[(0, 0)]).unwrap();
        let next = apply_pattern(&grid, &Pattern::new([(3, 3), (0, 0)])).unwrap();
        assert_eq!(next.live_cells(), vec![(0, 0), (3, 3)]);
    }

    #[test]
    fn out_of_range_rejects_whole_pattern() {
        let grid = Grid::new(5, 5).unwrap();
        let pattern = Pattern::new([(0, 0), (1, 1), (2, 9)]);
        assert_eq!(
            apply_pattern(&grid, &pattern),
            Err(LifeError::OutOfRange {
                row: 2,
                col: 9,
                rows: 5,
                cols: 5
            })
        );
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn duplicates_collapse() {
        let pattern = Pattern::new([(1, 1), (1, 1), (0, 2)]);
        assert_eq!(pattern.len(), 2);
    }

    #[test]
    fn parse_coordinates() {
        let pattern: Pattern = "1,0; 2,1 ;2,2;".parse().unwrap();
        assert_eq!(pattern.iter().collect::<Vec<_>>(), vec![(1, 0), (2, 1), (2, 2)]);
        assert!("".parse::<Pattern>().unwrap().is_empty());
        assert!("1;2".parse::<Pattern>().is_err());
        assert!("1,-2".parse::<Pattern>().is_err());
    }

    #[test]
    fn random_is_reproducible_and_in_bounds() {
        let dims = Dimensions::new(8, 12).unwrap();
        let mut a = rand_chacha::ChaCha8Rng::seed_from_u64(42);
        let mut b = rand_chacha::ChaCha8Rng::seed_from_u64(42);
        let first = Pattern::random(dims, 0.3, &mut a).unwrap();
        let second = Pattern::random(dims, 0.3, &mut b).unwrap();
        assert_eq!(first, second);
        assert!(first.iter().all(|(r, c)| dims.contains(r, c)));

        assert!(Pattern::random(dims, 0.0, &mut a).unwrap().is_empty());
        assert_eq!(Pattern::random(dims, 1.0, &mut a).unwrap().len(), dims.area());
    }

    #[test]
    fn random_rejects_bad_density() {
        let dims = Dimensions::default();
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            Pattern::random(dims, f64::NAN, &mut rng),
            Err(LifeError::InvalidDensity { density }) if density.is_nan()
        ));
        for density in [-0.1, 1.5, f64::INFINITY] {
            assert_eq!(
                Pattern::random(dims, density, &mut rng),
                Err(LifeError::InvalidDensity { density })
            );
        }
    }
}
