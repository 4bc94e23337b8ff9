use clap::Parser;
use forest_benchmark_rs::affinity::set_affinity;
use forest_benchmark_rs::error::Result;
use forest_benchmark_rs::grid::ParameterGrid;
use forest_benchmark_rs::runner::ExternalRunner;
use forest_benchmark_rs::sweep::run_sweep;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;

const BENCHMARK_PATH: &str = "./main";

/// Sweeps the decision-tree benchmark over its parameter grid and writes the
/// raw CSV output.
#[derive(Parser)]
#[command(name = "run_sweep")]
#[command(version)]
struct Cli {
    /// Output CSV file
    output: PathBuf,

    /// Benchmark executable
    #[arg(long, default_value = BENCHMARK_PATH)]
    executable: PathBuf,

    /// JSON file with num_trees, depth and num_features candidate values
    #[arg(long)]
    grid: Option<PathBuf>,

    /// CPU core to pin the sweep to
    #[arg(long)]
    core_id: Option<usize>,

    /// Seed for the run order
    #[arg(long)]
    seed: Option<u64>,

    /// Extra arguments passed to every benchmark run
    #[arg(last = true)]
    extra_args: Vec<String>,
}

fn run(cli: Cli) -> Result<()> {
    if let Some(core) = cli.core_id {
        set_affinity(core)?;
    }

    let grid = match &cli.grid {
        Some(path) => ParameterGrid::load(path)?,
        None => ParameterGrid::default_sweep(),
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("Shuffling {} combinations with seed {}", grid.len(), seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut runner = ExternalRunner::new(&cli.executable).with_trailing_args(cli.extra_args);
    let report = run_sweep(&grid, &mut runner, &mut rng, &cli.output)?;
    info!(
        "Sweep finished: {} runs, {} rows, {} bytes written to {}",
        report.runs,
        report.rows,
        report.bytes,
        cli.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
