//! # Grid and Double Buffer
//!
//! [`Grid`] is a row-major `width * height` array of cells. [`GenerationPair`]
//! owns the two buffers a run alternates between: one is read as the current
//! generation while the other is overwritten with the next, then the roles
//! flip. Neither buffer is reallocated after construction.

use crate::error::{Error, Result};

/// Rectangular array of live/dead cells, indexed `y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Wraps an existing row-major cell buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for a zero dimension and
    /// [`Error::DimensionMismatch`] if `cells.len() != width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        if cells.len() != width * height {
            return Err(Error::DimensionMismatch {
                expected: width * height,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a grid from rows of text, `alive` marking live cells.
    ///
    /// Handy for small fixtures; every row must have the same length.
    pub fn from_rows(rows: &[&str], alive: char) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(Error::config(format!(
                    "row {y} has length {}, expected {width}",
                    row.chars().count()
                )));
            }
            cells.extend(row.chars().map(|ch| ch == alive));
        }
        Self::from_cells(width, height, cells)
    }

    fn check_dimensions(width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::config(format!(
                "grid dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(())
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline(always)]
    pub const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Cell at `(x, y)`. Panics if out of bounds.
    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    #[inline(always)]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    pub fn into_cells(self) -> Vec<bool> {
        self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterates `(x, y, alive)` in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &alive)| (idx % self.width, idx / self.width, alive))
    }
}

/// Two same-sized grids that swap the current/next roles every generation.
///
/// The current buffer is only ever handed out shared and the next buffer
/// only exclusively, so a step cannot read what it is writing.
#[derive(Debug)]
pub struct GenerationPair {
    buffers: [Grid; 2],
    current: usize,
}

impl GenerationPair {
    /// Takes ownership of the initial grid and allocates its twin.
    pub fn new(initial: Grid) -> Self {
        let spare = Grid {
            width: initial.width,
            height: initial.height,
            cells: vec![false; initial.cells.len()],
        };
        Self {
            buffers: [initial, spare],
            current: 0,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.buffers[self.current]
    }

    /// `(current, next)` for one generation step.
    pub fn split(&mut self) -> (&Grid, &mut Grid) {
        let (first, second) = self.buffers.split_at_mut(1);
        if self.current == 0 {
            (&first[0], &mut second[0])
        } else {
            (&second[0], &mut first[0])
        }
    }

    /// Makes the freshly written buffer current.
    pub fn swap(&mut self) {
        self.current ^= 1;
    }

    pub fn into_current(self) -> Grid {
        let [first, second] = self.buffers;
        if self.current == 0 { first } else { second }
    }
}
