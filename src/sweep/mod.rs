use log::info;
use rand::Rng;
use std::fs;
use std::path::Path;

use crate::combinations::{generate, randomize};
use crate::dataset::load_samples;
use crate::error::Result;
use crate::grid::ParameterGrid;
use crate::runner::BenchmarkRunner;
use crate::statistics::{describe_samples, summary_table, Summary};

/// In-memory concatenation of every run's output. Nothing reaches disk
/// before `write_to`.
#[derive(Debug, Default)]
pub struct ResultBuffer {
    buffer: Vec<u8>,
    runs: usize,
}

impl ResultBuffer {
    pub fn new() -> Self {
        ResultBuffer::default()
    }

    /// Appends one run's output, terminating its last row if needed.
    pub fn append(&mut self, output: &[u8]) {
        self.buffer.extend_from_slice(output);
        if !output.is_empty() && !output.ends_with(b"\n") {
            self.buffer.push(b'\n');
        }
        self.runs += 1;
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Writes the whole buffer to `path` in one operation.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, &self.buffer)?;
        Ok(())
    }
}

/// Outcome of a completed sweep.
#[derive(Debug)]
pub struct SweepReport {
    pub runs: usize,
    pub bytes: usize,
    pub rows: usize,
    pub summary: Vec<(&'static str, Summary)>,
}

/// Runs every combination of `grid` once, in random order, and writes all
/// output to `output_path` at the end. The first failing run aborts the sweep
/// and nothing is written.
pub fn run_sweep<B, R, P>(grid: &ParameterGrid, runner: &mut B, rng: &mut R, output_path: P) -> Result<SweepReport>
where
    B: BenchmarkRunner + ?Sized,
    R: Rng + ?Sized,
    P: AsRef<Path>,
{
    let output_path = output_path.as_ref();
    info!("Running parameter sweep {:?}", grid);

    let combinations = randomize(generate(grid), rng);
    let total = combinations.len();
    let mut results = ResultBuffer::new();

    for (i, combination) in combinations.iter().enumerate() {
        info!("({}/{}) Running {}", i + 1, total, combination);
        let output = runner.run(combination)?;
        results.append(&output);
    }

    results.write_to(output_path)?;
    info!("Wrote {} bytes to {}", results.as_bytes().len(), output_path.display());

    let samples = load_samples(output_path)?;
    let summary = describe_samples(&samples);
    info!("Sweep summary ({} rows):\n{}", samples.len(), summary_table(&summary));

    Ok(SweepReport {
        runs: results.runs(),
        bytes: results.as_bytes().len(),
        rows: samples.len(),
        summary,
    })
}
