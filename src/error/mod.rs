use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

use crate::grid::Combination;

/// Result type alias used across the harness
pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The benchmark executable could not be started at all
    #[error("Failed to spawn '{}': {source}", .program.display())]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },

    /// The benchmark executable ran but exited unsuccessfully
    #[error("Benchmark failed for {combination}: {status}")]
    Execution {
        combination: Combination,
        status: ExitStatus,
    },

    /// A persisted row does not match the fixed five-column layout
    #[error("Malformed row at line {line}: {message}")]
    Format { line: u64, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid parameter grid: {0}")]
    InvalidGrid(String),

    #[error("Render failed: {0}")]
    Render(String),

    #[error("Cannot pin to core {core_id}: {message}")]
    Affinity { core_id: usize, message: String },
}

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for HarnessError
where
    E: std::error::Error + Send + Sync,
{
    fn from(e: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        HarnessError::Render(e.to_string())
    }
}
