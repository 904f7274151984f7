mod args;

use std::process::ExitCode;

use args::Args;
use clap::Parser;
use gol_torus::{
    Result, backend, io,
    render::to_display_string,
    timing::{Phase, Timings},
};

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.run_config();
    let markers = args.markers()?;
    let mut timings = Timings::new();

    let executor = timings.measure(Phase::Setup, || -> Result<_> {
        let grid = io::load(&args.load, markers)?;
        tracing::info!(
            "Loaded {}x{} grid with {} live cells from {}",
            grid.width(),
            grid.height(),
            grid.population(),
            args.load.display()
        );
        backend::executor(grid, &config)
    })?;

    // `finish` reads the result back from the device, so it belongs to
    // finalization rather than computation.
    let executor = timings.measure(Phase::Computation, || -> Result<_> {
        let mut executor = executor;
        for _ in 0..config.generations {
            executor.advance()?;
        }
        Ok(executor)
    })?;

    let grid = timings.measure(Phase::Finalization, || -> Result<_> {
        let grid = executor.finish()?;
        io::save(&args.save, &grid, markers)?;
        Ok(grid)
    })?;

    tracing::info!(
        "Wrote generation {} ({} live cells) to {}",
        config.generations,
        grid.population(),
        args.save.display()
    );

    if args.print {
        println!("{}", to_display_string(&grid));
    }
    if args.measure {
        println!("{timings}");
    }
    Ok(())
}
