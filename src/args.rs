//! # Command Line Arguments
//!
//! Parsing of the command line into a [`RunConfig`], the grid file paths and
//! the cell markers.
//!
//! ## Example Usage
//!
//! ```bash
//! # One generation of in.gol into out.gol, single-threaded
//! gol-torus
//!
//! # 500 generations on 8 worker threads, with timings
//! gol-torus -l glider.gol -s glider_500.gol -g 500 -b parallel-cpu -w 8 -m
//!
//! # Device backend, '#' for live cells and '-' for dead ones
//! gol-torus -b gpu -g 1000 --alive '#' --dead '-'
//! ```

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::Level;

use gol_torus::{BackendKind, Markers, Result, RunConfig, io};

/// Conway's Game of Life on a wrap-around grid.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Grid file to read
    ///
    /// First line `<width>,<height>`, then the cells row by row as alive/dead
    /// markers.
    #[arg(short, long, default_value = "in.gol")]
    pub load: PathBuf,

    /// Grid file to write the final generation to
    #[arg(short, long, default_value = "out.gol")]
    pub save: PathBuf,

    /// Number of generations to run (0 copies the input)
    #[arg(short, long, default_value_t = 1)]
    pub generations: u64,

    /// Execution backend
    #[arg(short, long, value_enum, default_value_t = BackendKind::Sequential)]
    pub backend: BackendKind,

    /// Worker threads for the parallel-cpu backend (default: one per CPU)
    #[arg(short, long)]
    pub workers: Option<NonZeroUsize>,

    /// Character marking a live cell
    #[arg(long, default_value_t = io::ALIVE)]
    pub alive: char,

    /// Character marking a dead cell
    #[arg(long, default_value_t = io::DEAD)]
    pub dead: char,

    /// Print setup, computation and finalization times
    #[arg(short, long)]
    pub measure: bool,

    /// Draw the final generation on stdout
    #[arg(short, long)]
    pub print: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            backend: self.backend,
            generations: self.generations,
            workers: self.workers,
        }
    }

    pub fn markers(&self) -> Result<Markers> {
        Markers::new(self.alive, self.dead)
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["gol-torus"]).unwrap();
        assert_eq!(args.load, PathBuf::from("in.gol"));
        assert_eq!(args.save, PathBuf::from("out.gol"));
        assert_eq!(args.run_config(), RunConfig::new(BackendKind::Sequential, 1));
        assert_eq!(args.markers().unwrap(), Markers::default());
        assert_eq!(args.log_level(), Level::INFO);
    }

    #[test]
    fn full_command_line() {
        let args = Args::try_parse_from([
            "gol-torus", "-l", "a.gol", "-s", "b.gol", "-g", "0", "-b", "parallel-cpu", "-w", "3",
            "--alive", "#", "--dead", "-", "-m", "-vv",
        ])
        .unwrap();
        let config = args.run_config();
        assert_eq!(config.backend, BackendKind::ParallelCpu);
        assert_eq!(config.generations, 0);
        assert_eq!(config.workers, NonZeroUsize::new(3));
        assert_eq!(args.markers().unwrap().alive(), '#');
        assert!(args.measure);
        assert_eq!(args.log_level(), Level::TRACE);
    }

    #[test]
    fn rejects_bad_values_before_running() {
        for argv in [
            &["gol-torus", "-b", "opencl"][..],
            &["gol-torus", "-w", "0"],
            &["gol-torus", "-g", "-3"],
        ] {
            assert!(Args::try_parse_from(argv).is_err(), "{argv:?}");
        }
    }
}
