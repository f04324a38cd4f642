//! Live-neighbour counting on a bounded grid.

use crate::error::Result;
use crate::grid::Grid;

/// Counts the number of live neighbours of the cell at `(row, col)`.
///
/// Neighbours are the up to eight cells whose row and column each differ by at
/// most one. Positions outside the grid are not neighbours: the grid does not
/// wrap, so a corner cell has 3 neighbours, an edge cell 5 and an interior cell 8.
///
/// # Returns
///
/// The number of live neighbours (0-8)
///
/// # Errors
///
/// Returns [`LifeError::OutOfRange`](crate::LifeError::OutOfRange) if
/// `(row, col)` is not a cell of `grid`.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> Result<u8> {
    grid.dimensions().check(row, col)?;
    Ok(live_neighbors(grid, row, col))
}

/// Same as [`count_live_neighbors`] for a coordinate already known to be inside.
pub(crate) fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let row_range = row.saturating_sub(1)..=(row + 1).min(grid.rows() - 1);
    let col_range = col.saturating_sub(1)..=(col + 1).min(grid.cols() - 1);

    let mut count = 0;
    for r in row_range {
        let cells = grid.row(r);
        for c in col_range.clone() {
            if (r, c) != (row, col) && cells[c].is_alive() {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Dimensions};
    use crate::LifeError;

    fn all_alive(rows: usize, cols: usize) -> Grid {
        Grid::from_rows(vec![vec![Cell::Alive; cols]; rows]).unwrap()
    }

    #[test]
    fn dead_grid_has_no_neighbors() {
        let grid = Grid::new(6, 4).unwrap();
        for r in 0..6 {
            for c in 0..4 {
                assert_eq!(count_live_neighbors(&grid, r, c), Ok(0));
            }
        }
    }

    #[test]
    fn full_grid_counts_respect_edges() {
        let grid = all_alive(5, 5);
        // corners
        for (r, c) in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert_eq!(count_live_neighbors(&grid, r, c), Ok(3), "corner ({r}, {c})");
        }
        // edges
        for (r, c) in [(0, 2), (2, 0), (4, 3), (1, 4)] {
            assert_eq!(count_live_neighbors(&grid, r, c), Ok(5), "edge ({r}, {c})");
        }
        // interior
        for r in 1..4 {
            for c in 1..4 {
                assert_eq!(count_live_neighbors(&grid, r, c), Ok(8));
            }
        }
    }

    #[test]
    fn cell_itself_is_not_counted() {
        let dims = Dimensions::new(3, 3).unwrap();
        let grid = Grid::with_live_cells(dims, &[(1, 1)]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 1, 1), Ok(0));
        assert_eq!(count_live_neighbors(&grid, 0, 0), Ok(1));
    }

    #[test]
    fn no_wraparound() {
        let dims = Dimensions::new(4, 4).unwrap();
        let grid = Grid::with_live_cells(dims, &[(0, 3), (3, 0), (3, 3)]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 0, 0), Ok(0));
    }

    #[test]
    fn single_row_and_single_cell_grids() {
        let row = all_alive(1, 4);
        assert_eq!(count_live_neighbors(&row, 0, 0), Ok(1));
        assert_eq!(count_live_neighbors(&row, 0, 2), Ok(2));

        let single = all_alive(1, 1);
        assert_eq!(count_live_neighbors(&single, 0, 0), Ok(0));
    }

    #[test]
    fn out_of_range_coordinate_is_rejected() {
        let grid = Grid::new(3, 5).unwrap();
        assert_eq!(
            count_live_neighbors(&grid, 1, 5),
            Err(LifeError::OutOfRange {
                row: 1,
                col: 5,
                rows: 3,
                cols: 5
            })
        );
    }
}
