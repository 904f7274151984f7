//! Wall-clock measurements of the three phases of a run.

use std::fmt;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Loading the grid and bringing up the backend
    Setup,
    /// Running the generations
    Computation,
    /// Reading the result back and writing it out
    Finalization,
}

impl Phase {
    const ALL: [Phase; 3] = [Self::Setup, Self::Computation, Self::Finalization];

    fn label(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Computation => "computation",
            Self::Finalization => "finalization",
        }
    }
}

#[derive(Debug, Default)]
pub struct Timings {
    elapsed: [Duration; 3],
}

impl Timings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f`, adding its wall time to `phase`.
    pub fn measure<T>(&mut self, phase: Phase, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.elapsed[phase as usize] += start.elapsed();
        out
    }

    pub fn get(&self, phase: Phase) -> Duration {
        self.elapsed[phase as usize]
    }

    pub fn total(&self) -> Duration {
        self.elapsed.iter().sum()
    }
}

impl fmt::Display for Timings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for phase in Phase::ALL {
            writeln!(f, "{:<14}{:>12.3} ms", phase.label(), self.get(phase).as_secs_f64() * 1e3)?;
        }
        write!(f, "{:<14}{:>12.3} ms", "total", self.total().as_secs_f64() * 1e3)
    }
}
