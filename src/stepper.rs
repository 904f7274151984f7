//! # Generation Stepper
//!
//! One synchronous generation: every cell of `next` is computed from
//! `current` and written exactly once. The work is split into two disjoint
//! passes:
//!
//! 1. **Border pass**: the perimeter ring (`x ∈ {0, W-1}` or `y ∈ {0, H-1}`),
//!    where at least one neighbour read wraps, so counts go through
//!    [`neighbors::count`].
//! 2. **Interior pass**: `1..W-1 × 1..H-1`, where no read can leave the grid,
//!    so the eight neighbours are summed straight from the three row slices.
//!
//! For `W <= 2` or `H <= 2` the ring is the whole grid and the interior pass
//! does nothing. The split is purely a speed-up: [`step`] and
//! [`step_uniform`] always agree.

use crate::grid::Grid;
use crate::neighbors;
use crate::rule;

/// Next state of one cell via the wrapping neighbour count.
#[inline]
pub fn border_cell(current: &Grid, x: usize, y: usize) -> bool {
    rule::next(current.get(x, y), neighbors::count(current, x, y))
}

/// Writes the perimeter ring of `next`.
pub fn border_pass(current: &Grid, next: &mut Grid) {
    let (width, height) = current.dimensions();

    // Top and bottom rows
    for x in 0..width {
        next.set(x, 0, border_cell(current, x, 0));
        if height > 1 {
            next.set(x, height - 1, border_cell(current, x, height - 1));
        }
    }
    // Left and right columns, corners already done
    for y in 1..height.saturating_sub(1) {
        next.set(0, y, border_cell(current, 0, y));
        if width > 1 {
            next.set(width - 1, y, border_cell(current, width - 1, y));
        }
    }
}

/// Writes cells `1..W-1` of interior row `y` into `out` (a full output row).
///
/// `y` must satisfy `1 <= y <= H-2`.
#[inline]
pub fn interior_row(current: &Grid, y: usize, out: &mut [bool]) {
    let width = current.width();
    let cells = current.cells();
    let above = &cells[(y - 1) * width..y * width];
    let row = &cells[y * width..(y + 1) * width];
    let below = &cells[(y + 1) * width..(y + 2) * width];

    for x in 1..width.saturating_sub(1) {
        let count = above[x - 1] as u8
            + above[x] as u8
            + above[x + 1] as u8
            + row[x - 1] as u8
            + row[x + 1] as u8
            + below[x - 1] as u8
            + below[x] as u8
            + below[x + 1] as u8;
        out[x] = rule::next(row[x], count);
    }
}

/// Writes every cell of `next` not on the perimeter ring.
pub fn interior_pass(current: &Grid, next: &mut Grid) {
    let (width, height) = current.dimensions();
    if width < 3 || height < 3 {
        return;
    }
    let out = next.cells_mut();
    for y in 1..height - 1 {
        interior_row(current, y, &mut out[y * width..(y + 1) * width]);
    }
}

/// Writes all of row `y` into `out`, border cells included.
///
/// Lets a caller hand whole output rows to different workers.
pub fn full_row(current: &Grid, y: usize, out: &mut [bool]) {
    let (width, height) = current.dimensions();
    if y == 0 || y == height - 1 {
        for (x, cell) in out.iter_mut().enumerate() {
            *cell = border_cell(current, x, y);
        }
        return;
    }
    out[0] = border_cell(current, 0, y);
    if width > 1 {
        out[width - 1] = border_cell(current, width - 1, y);
    }
    interior_row(current, y, out);
}

/// Advances one generation from `current` into `next`.
pub fn step(current: &Grid, next: &mut Grid) {
    debug_assert_eq!(current.dimensions(), next.dimensions());
    border_pass(current, next);
    interior_pass(current, next);
}

/// Advances one generation using the wrapping count for every cell.
///
/// Slow reference the split passes are checked against.
pub fn step_uniform(current: &Grid, next: &mut Grid) {
    debug_assert_eq!(current.dimensions(), next.dimensions());
    let (width, height) = current.dimensions();
    for y in 0..height {
        for x in 0..width {
            next.set(x, y, border_cell(current, x, y));
        }
    }
}
