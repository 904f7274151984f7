//! # Parallel CPU Backend
//!
//! Output rows are handed to a dedicated rayon pool. Each row of `next` is a
//! disjoint `&mut` chunk owned by one task, and `current` is only shared, so
//! the partition needs no locks. `install` returns once every row is
//! written, which is the barrier before the buffers swap.

use std::num::NonZeroUsize;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::BackendKind;
use crate::error::{Error, Result};
use crate::grid::{GenerationPair, Grid};
use crate::stepper;

use super::Executor;

/// Rough lower bound on cells per task so tiny rows are batched together.
const MIN_CELLS_PER_TASK: usize = 4096;

/// Row-parallel executor on its own thread pool.
pub struct ParallelExecutor {
    pair: GenerationPair,
    pool: ThreadPool,
    generation: u64,
}

impl ParallelExecutor {
    /// Builds the pool; `workers` defaults to rayon's choice (logical CPUs).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Platform`] if the pool cannot spawn its threads.
    pub fn new(grid: Grid, workers: Option<NonZeroUsize>) -> Result<Self> {
        let mut builder = ThreadPoolBuilder::new().thread_name(|i| format!("gol-worker-{i}"));
        if let Some(workers) = workers {
            builder = builder.num_threads(workers.get());
        }
        let pool = builder
            .build()
            .map_err(|e| Error::platform(format!("cannot start worker pool: {e}")))?;

        Ok(Self {
            pair: GenerationPair::new(grid),
            pool,
            generation: 0,
        })
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl Executor for ParallelExecutor {
    fn kind(&self) -> BackendKind {
        BackendKind::ParallelCpu
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn advance(&mut self) -> Result<()> {
        let (current, next) = self.pair.split();
        let width = current.width();
        let rows_per_task = (MIN_CELLS_PER_TASK / width).max(1);

        self.pool.install(|| {
            next.cells_mut()
                .par_chunks_mut(width)
                .with_min_len(rows_per_task)
                .enumerate()
                .for_each(|(y, row)| stepper::full_row(current, y, row));
        });

        self.pair.swap();
        self.generation += 1;
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<Grid> {
        Ok(self.pair.into_current())
    }
}
