//! Run configuration: which backend, how many generations, how many workers.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::Error;

/// Execution backend. Backends differ in speed only, never in result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum BackendKind {
    /// Border pass then interior pass on the calling thread
    #[default]
    Sequential,
    /// Output rows spread over a rayon thread pool
    ParallelCpu,
    /// One kernel invocation per generation on a burn tensor device
    Gpu,
}

impl BackendKind {
    pub const ALL: [BackendKind; 3] = [Self::Sequential, Self::ParallelCpu, Self::Gpu];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::ParallelCpu => "parallel-cpu",
            Self::Gpu => "gpu",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownBackend(s.to_string()))
    }
}

/// Everything the engine needs besides the grid itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub backend: BackendKind,
    pub generations: u64,
    /// Thread-count hint for [`BackendKind::ParallelCpu`]; ignored elsewhere.
    pub workers: Option<NonZeroUsize>,
}

impl RunConfig {
    pub fn new(backend: BackendKind, generations: u64) -> Self {
        Self {
            backend,
            generations,
            workers: None,
        }
    }

    pub fn with_workers(mut self, workers: NonZeroUsize) -> Self {
        self.workers = Some(workers);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_backends() {
        assert_eq!("sequential".parse::<BackendKind>().unwrap(), BackendKind::Sequential);
        assert_eq!("Parallel-CPU".parse::<BackendKind>().unwrap(), BackendKind::ParallelCpu);
        assert_eq!(" gpu ".parse::<BackendKind>().unwrap(), BackendKind::Gpu);
    }

    #[test]
    fn rejects_unknown_backend() {
        let err = "opencl".parse::<BackendKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownBackend(name) if name == "opencl"));
    }

    #[test]
    fn display_round_trips() {
        for kind in BackendKind::ALL {
            assert_eq!(kind.to_string().parse::<BackendKind>().unwrap(), kind);
        }
    }
}
