//! # Toroidal Game of Life
//!
//! Conway's Game of Life on a wrap-around grid, advanced generation by
//! generation on an interchangeable backend:
//!
//! - **Sequential**: one thread, border ring then unwrapped interior
//! - **Parallel CPU**: rows of the output spread over a rayon pool
//! - **GPU**: a burn tensor kernel with both generations resident on device
//!
//! All backends produce bit-identical grids for the same input.
//!
//! ```
//! use gol_torus::{BackendKind, Grid, RunConfig, backend};
//!
//! let blinker = Grid::from_rows(&[".....", ".....", ".xxx.", ".....", "....."], 'x')?;
//! let config = RunConfig::new(BackendKind::ParallelCpu, 2);
//! assert_eq!(backend::simulate(blinker.clone(), &config)?, blinker);
//! # Ok::<(), gol_torus::Error>(())
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod grid;
pub mod io;
pub mod model;
pub mod neighbors;
pub mod render;
pub mod rule;
pub mod stepper;
pub mod timing;

pub use backend::{Executor, executor, run, simulate};
pub use config::{BackendKind, RunConfig};
pub use error::{Error, Result};
pub use grid::{GenerationPair, Grid};
pub use io::Markers;
