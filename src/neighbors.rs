//! Toroidal neighbour counting.

use crate::grid::Grid;

/// Moore-neighbourhood offsets, self excluded.
pub const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Wraps a coordinate that is at most one step outside `0..dim`.
///
/// `-1` maps to `dim - 1` and `dim` maps to `0`. For `dim == 1` both sides
/// land on the only column (or row) there is.
#[inline(always)]
pub fn wrap(c: isize, dim: usize) -> usize {
    if c < 0 {
        dim - 1
    } else if c as usize >= dim {
        0
    } else {
        c as usize
    }
}

/// Live neighbours of `(x, y)` with both axes wrapping around.
///
/// Correct for every cell but branches on each of the eight reads; the
/// stepper only uses it on the border ring.
pub fn count(grid: &Grid, x: usize, y: usize) -> u8 {
    let (width, height) = grid.dimensions();
    OFFSETS
        .iter()
        .map(|&(dx, dy)| {
            let nx = wrap(x as isize + dx, width);
            let ny = wrap(y as isize + dy, height);
            grid.get(nx, ny) as u8
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_edges() {
        assert_eq!(wrap(-1, 5), 4);
        assert_eq!(wrap(5, 5), 0);
        assert_eq!(wrap(3, 5), 3);
        assert_eq!(wrap(-1, 1), 0);
        assert_eq!(wrap(1, 1), 0);
    }

    #[test]
    fn corner_is_neighbour_of_opposite_corners() {
        for (width, height) in [(3, 3), (4, 7), (10, 2), (2, 9)] {
            let mut grid = Grid::new(width, height).unwrap();
            grid.set(0, 0, true);
            for (x, y) in [(width - 1, 0), (0, height - 1), (width - 1, height - 1)] {
                assert!(count(&grid, x, y) >= 1, "({x}, {y}) on {width}x{height}");
            }
        }
    }

    #[test]
    fn single_cell_sees_itself_eight_times() {
        let mut grid = Grid::new(1, 1).unwrap();
        assert_eq!(count(&grid, 0, 0), 0);
        grid.set(0, 0, true);
        assert_eq!(count(&grid, 0, 0), 8);
    }

    #[test]
    fn narrow_grid_double_counts_wrapped_column() {
        // Width 2: left and right neighbour are the same cell.
        let grid = Grid::from_rows(&["x.", "..", ".."], 'x').unwrap();
        assert_eq!(count(&grid, 1, 0), 2);
        assert_eq!(count(&grid, 1, 1), 2);
        assert_eq!(count(&grid, 0, 1), 1);
    }
}
