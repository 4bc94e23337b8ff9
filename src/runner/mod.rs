use log::debug;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{HarnessError, Result};
use crate::grid::Combination;

/// Produces the raw CSV rows of one benchmark run.
pub trait BenchmarkRunner {
    fn run(&mut self, combination: &Combination) -> Result<Vec<u8>>;
}

/// Runs the external decision-tree executable in CSV mode.
pub struct ExternalRunner {
    program: PathBuf,
    leading_args: Vec<String>,  // Placed before the parameter flags
    trailing_args: Vec<String>, // Placed after the parameter flags
}

impl ExternalRunner {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        ExternalRunner {
            program: program.into(),
            leading_args: Vec::new(),
            trailing_args: Vec::new(),
        }
    }

    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_trailing_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trailing_args = args.into_iter().map(Into::into).collect();
        self
    }

    fn command(&self, combination: &Combination) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args)
            .arg("--output_csv")
            .arg("-num_trees")
            .arg(combination.num_trees.to_string())
            .arg("-depth")
            .arg(combination.depth.to_string())
            .arg("-num_features")
            .arg(combination.num_features.to_string())
            .args(&self.trailing_args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        cmd
    }
}

impl BenchmarkRunner for ExternalRunner {
    fn run(&mut self, combination: &Combination) -> Result<Vec<u8>> {
        let mut cmd = self.command(combination);
        debug!("Calling {:?}", cmd);

        let output = cmd.output().map_err(|source| HarnessError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(HarnessError::Execution {
                combination: *combination,
                status: output.status,
            });
        }

        Ok(output.stdout)
    }
}
