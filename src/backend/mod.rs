//! # Backend Executors
//!
//! A run is `Ready(grid) -> advance -> Ready(grid') -> ... -> Done(grid)`.
//! Each executor owns its double buffer (and any thread pool or device
//! state) for the whole run; everything is released when the executor is
//! finished or dropped.
//!
//! Three interchangeable backends:
//! - **Sequential**: border pass then interior pass on the calling thread
//! - **Parallel CPU**: output rows spread over a rayon pool
//! - **GPU**: burn tensors kept on the device between generations

mod gpu;
mod parallel;
mod sequential;

pub use gpu::{DeviceBackend, GpuExecutor};
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

use crate::config::{BackendKind, RunConfig};
use crate::error::Result;
use crate::grid::Grid;

/// A grid being advanced one generation at a time.
pub trait Executor {
    fn kind(&self) -> BackendKind;

    /// Generations completed so far.
    fn generation(&self) -> u64;

    /// Advances the held grid by exactly one generation.
    ///
    /// Returns only after every cell of the new generation has been written.
    fn advance(&mut self) -> Result<()>;

    /// Ends the run and hands back the current grid.
    fn finish(self: Box<Self>) -> Result<Grid>;
}

/// Sets up the executor named by `config` around `grid`.
///
/// # Errors
///
/// [`crate::Error::Platform`] if the worker pool or compute device cannot be
/// brought up. No other backend is tried in its place.
pub fn executor(grid: Grid, config: &RunConfig) -> Result<Box<dyn Executor>> {
    let (width, height) = grid.dimensions();
    match config.backend {
        BackendKind::Sequential => {
            tracing::info!("Using sequential backend for {width}x{height} grid");
            Ok(Box::new(SequentialExecutor::new(grid)))
        }
        BackendKind::ParallelCpu => {
            let executor = ParallelExecutor::new(grid, config.workers)?;
            tracing::info!(
                "Using parallel CPU backend (rayon, {} workers) for {width}x{height} grid",
                executor.workers()
            );
            Ok(Box::new(executor))
        }
        BackendKind::Gpu => {
            let executor = GpuExecutor::<DeviceBackend>::new(grid, &Default::default())?;
            tracing::info!("Using GPU backend ({}) for {width}x{height} grid", gpu::DEVICE_NAME);
            Ok(Box::new(executor))
        }
    }
}

/// Advances `executor` by `generations` and returns the final grid.
///
/// Zero generations hands back the initial grid untouched.
pub fn run(mut executor: Box<dyn Executor>, generations: u64) -> Result<Grid> {
    let kind = executor.kind();
    for _ in 0..generations {
        executor.advance()?;
        tracing::trace!(backend = %kind, generation = executor.generation(), "generation done");
    }
    tracing::debug!(backend = %kind, generations, "run complete");
    executor.finish()
}

/// Sets up the configured backend and runs it to completion.
pub fn simulate(grid: Grid, config: &RunConfig) -> Result<Grid> {
    run(executor(grid, config)?, config.generations)
}
