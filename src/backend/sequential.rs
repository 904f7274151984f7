use crate::config::BackendKind;
use crate::error::Result;
use crate::grid::{GenerationPair, Grid};
use crate::stepper;

use super::Executor;

/// Single-threaded executor: border pass, interior pass, swap.
pub struct SequentialExecutor {
    pair: GenerationPair,
    generation: u64,
}

impl SequentialExecutor {
    pub fn new(grid: Grid) -> Self {
        Self {
            pair: GenerationPair::new(grid),
            generation: 0,
        }
    }
}

impl Executor for SequentialExecutor {
    fn kind(&self) -> BackendKind {
        BackendKind::Sequential
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn advance(&mut self) -> Result<()> {
        let (current, next) = self.pair.split();
        stepper::step(current, next);
        self.pair.swap();
        self.generation += 1;
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<Grid> {
        Ok(self.pair.into_current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glider_moves_diagonally_and_wraps() {
        let start = Grid::from_rows(
            &[".x....", "..x...", "xxx...", "......", "......", "......"],
            'x',
        )
        .unwrap();
        let mut executor = Box::new(SequentialExecutor::new(start.clone()));
        // A glider travels one cell diagonally every 4 generations; 24 brings it home.
        for _ in 0..24 {
            executor.advance().unwrap();
        }
        assert_eq!(executor.generation(), 24);
        assert_eq!(executor.finish().unwrap(), start);
    }
}
