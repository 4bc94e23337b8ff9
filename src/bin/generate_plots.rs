use clap::Parser;
use forest_benchmark_rs::error::Result;
use forest_benchmark_rs::plots::{generate_plots, PlotSelection};
use forest_benchmark_rs::render::{RenderContext, DEFAULT_SIZE};
use log::{error, info, warn};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

const OUTPUT_DIR: &str = ".";

/// Reduces a sweep's raw CSV to per-configuration minima and renders the
/// slice and trellis views.
#[derive(Parser)]
#[command(name = "generate_plots")]
#[command(version)]
struct Cli {
    /// Raw CSV written by run_sweep
    input: PathBuf,

    /// Render the three trellis views
    #[arg(long)]
    trellis: bool,

    /// Render the six slice views
    #[arg(long)]
    slices: bool,

    /// Directory for the SVG files
    #[arg(long, default_value = OUTPUT_DIR)]
    output_dir: PathBuf,

    #[arg(long, default_value_t = DEFAULT_SIZE.0)]
    width: u32,

    #[arg(long, default_value_t = DEFAULT_SIZE.1)]
    height: u32,
}

fn run(cli: Cli) -> Result<()> {
    if !cli.trellis && !cli.slices {
        warn!("Neither --trellis nor --slices given, nothing to render");
    }

    fs::create_dir_all(&cli.output_dir)?;
    let mut ctx = RenderContext::new(&cli.output_dir, (cli.width, cli.height));
    let selection = PlotSelection {
        trellis: cli.trellis,
        slices: cli.slices,
    };

    let artifacts = generate_plots(&cli.input, selection, &mut ctx)?;
    info!("Rendered {} plots into {}", artifacts.len(), ctx.output_dir().display());
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
