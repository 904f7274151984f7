use crate::grid::Grid;

const SQUARE_SYMBOL: char = '■';

/// Draws the grid for a terminal: a filled square per live cell, a space per
/// dead one, rows separated by line breaks.
pub fn to_display_string(grid: &Grid) -> String {
    let (width, height) = grid.dimensions();
    let mut result = String::with_capacity(height * (width + 1));

    for (row, cells) in grid.cells().chunks(width).enumerate() {
        for &alive in cells {
            result.push(if alive { SQUARE_SYMBOL } else { ' ' });
        }
        if row < height - 1 {
            result.push('\n');
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_for_live_cells() {
        let grid = Grid::from_rows(&["x.", ".x"], 'x').unwrap();
        assert_eq!(to_display_string(&grid), "■ \n ■");
    }
}
