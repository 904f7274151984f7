//! # Grid Files
//!
//! Reading and writing grids in the plain-text `.gol` format:
//!
//! ```text
//! 5,3
//! .....
//! .xxx.
//! .....
//! ```
//!
//! The first line is `<width>,<height>`. After it, every alive or dead marker
//! is one cell in row-major order; anything else (line breaks, spaces) is
//! skipped and reading stops once `width * height` cells are in. Writing
//! puts `width` markers per row and no line break after the last row.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::grid::Grid;

/// Default live-cell marker
pub const ALIVE: char = 'x';
/// Default dead-cell marker
pub const DEAD: char = '.';

/// The pair of characters cells are written as.
///
/// The same pair is used for reading and writing, so a saved grid always
/// loads back identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Markers {
    alive: char,
    dead: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            alive: ALIVE,
            dead: DEAD,
        }
    }
}

impl Markers {
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the markers are equal, whitespace, or
    /// the header separator.
    pub fn new(alive: char, dead: char) -> Result<Self> {
        if alive == dead {
            return Err(Error::config(format!("alive and dead markers are both '{alive}'")));
        }
        for marker in [alive, dead] {
            if marker.is_whitespace() || marker == ',' {
                return Err(Error::config(format!(
                    "'{}' cannot be used as a cell marker",
                    marker.escape_default()
                )));
            }
        }
        Ok(Self { alive, dead })
    }

    pub const fn alive(&self) -> char {
        self.alive
    }

    pub const fn dead(&self) -> char {
        self.dead
    }

    #[inline]
    pub const fn marker(&self, alive: bool) -> char {
        if alive { self.alive } else { self.dead }
    }
}

/// Parses a grid from the full text of a `.gol` file.
///
/// # Errors
///
/// Returns [`Error::Format`] if the header is missing or malformed, a
/// dimension is zero, or the body holds fewer than `width * height` cells.
pub fn parse_grid(text: &str, markers: Markers) -> Result<Grid> {
    let (header, body) = text.split_once('\n').unwrap_or((text, ""));
    let (width, height) = parse_header(header.trim_end_matches('\r'))?;

    let size = width
        .checked_mul(height)
        .ok_or_else(|| Error::format(1, format!("grid {width}x{height} is too large")))?;

    let mut cells = Vec::with_capacity(size.min(body.len()));
    let mut line = 2;
    for ch in body.chars() {
        if cells.len() == size {
            break;
        }
        if ch == markers.alive {
            cells.push(true);
        } else if ch == markers.dead {
            cells.push(false);
        } else if ch == '\n' {
            line += 1;
        }
    }

    if cells.len() < size {
        return Err(Error::format(
            line,
            format!("expected {size} cells for a {width}x{height} grid, found {}", cells.len()),
        ));
    }
    Grid::from_cells(width, height, cells)
}

fn parse_header(header: &str) -> Result<(usize, usize)> {
    let (columns, rows) = header
        .split_once(',')
        .ok_or_else(|| Error::format(1, format!("expected '<width>,<height>', found '{header}'")))?;

    let parse = |value: &str, what: &str| -> Result<usize> {
        let value = value.trim();
        let n: usize = value
            .parse()
            .map_err(|e| Error::format(1, format!("invalid {what} '{value}': {e}")))?;
        if n == 0 {
            return Err(Error::format(1, format!("{what} must be positive")));
        }
        Ok(n)
    };

    Ok((parse(columns, "width")?, parse(rows, "height")?))
}

/// Reads a grid from any reader.
pub fn read_grid<R: Read>(mut reader: R, markers: Markers) -> Result<Grid> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_grid(&text, markers)
}

/// Writes `grid` in `.gol` format.
pub fn write_grid<W: Write>(mut writer: W, grid: &Grid, markers: Markers) -> Result<()> {
    let (width, height) = grid.dimensions();
    writeln!(writer, "{width},{height}")?;

    let mut row = String::with_capacity(width + 1);
    for (y, cells) in grid.cells().chunks(width).enumerate() {
        row.clear();
        row.extend(cells.iter().map(|&alive| markers.marker(alive)));
        if y + 1 < height {
            row.push('\n');
        }
        writer.write_all(row.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Loads a grid file from disk.
pub fn load(path: &Path, markers: Markers) -> Result<Grid> {
    let file = File::open(path)?;
    read_grid(BufReader::new(file), markers)
}

/// Saves a grid file to disk, replacing any existing file.
pub fn save(path: &Path, grid: &Grid, markers: Markers) -> Result<()> {
    let file = File::create(path)?;
    write_grid(BufWriter::new(file), grid, markers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(grid: &Grid, markers: Markers) -> String {
        let mut out = Vec::new();
        write_grid(&mut out, grid, markers).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_header_and_rows() {
        let grid = parse_grid("4,2\nx..x\n.xx.\n", Markers::default()).unwrap();
        assert_eq!(grid.dimensions(), (4, 2));
        assert_eq!(grid, Grid::from_rows(&["x..x", ".xx."], 'x').unwrap());
    }

    #[test]
    fn skips_foreign_characters_and_crlf() {
        let grid = parse_grid(" 3 , 2 \r\nx x .\r\n. . x\r\n", Markers::default()).unwrap();
        assert_eq!(grid, Grid::from_rows(&["xx.", "..x"], 'x').unwrap());
    }

    #[test]
    fn ignores_cells_past_the_grid() {
        let grid = parse_grid("2,1\nx.xxxx", Markers::default()).unwrap();
        assert_eq!(grid.cells(), &[true, false]);
    }

    #[test]
    fn rejects_bad_headers() {
        for text in ["", "3\n...", "a,2\n......", "3,0\n", "0,3\n..."] {
            let err = parse_grid(text, Markers::default()).unwrap_err();
            assert!(matches!(err, Error::Format { line: 1, .. }), "{text:?}: {err}");
        }
    }

    #[test]
    fn rejects_short_body() {
        let err = parse_grid("3,3\nxxx\n...\n", Markers::default()).unwrap_err();
        assert!(matches!(err, Error::Format { line: 4, .. }), "{err}");
    }

    #[test]
    fn writes_without_trailing_newline() {
        let grid = Grid::from_rows(&["x..", ".x."], 'x').unwrap();
        assert_eq!(written(&grid, Markers::default()), "3,2\nx..\n.x.");
    }

    #[test]
    fn custom_markers_are_symmetric() {
        let err = Markers::new('#', ' ').unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let markers = Markers::new('#', '-').unwrap();
        let grid = Grid::from_rows(&["#-#", "--#"], '#').unwrap();
        let text = written(&grid, markers);
        assert_eq!(text, "3,2\n#-#\n--#");
        assert_eq!(parse_grid(&text, markers).unwrap(), grid);
        // Default markers see none of these cells.
        assert!(parse_grid(&text, Markers::default()).is_err());
    }

    #[test]
    fn rejects_equal_markers() {
        assert!(Markers::new('o', 'o').is_err());
        assert!(Markers::new(',', '.').is_err());
    }
}
