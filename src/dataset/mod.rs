use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{HarnessError, Result};
use crate::grid::Axis;

/// Column names of the persisted dataset. The file itself has no header.
pub const COLUMNS: [&str; 5] = ["algorithm", "num_trees", "depth", "num_features", "time_ns"];

/// One measurement as emitted by the benchmark executable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sample {
    pub algorithm: String,
    pub num_trees: u64,
    pub depth: u64,
    pub num_features: u64,
    pub time_ns: u64,
}

/// One configuration of the reduced dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub algorithm: String,
    pub num_trees: u64,
    pub depth: u64,
    pub num_features: u64,
    pub min_time_ns: u64,
}

impl Record {
    pub fn get(&self, axis: Axis) -> u64 {
        match axis {
            Axis::NumTrees => self.num_trees,
            Axis::Depth => self.depth,
            Axis::NumFeatures => self.num_features,
        }
    }
}

/// Loads a headerless five-column dataset. Padding around the numeric
/// fields is ignored; the algorithm name is kept exactly as written.
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<Sample>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_path(path)?;

    let mut samples = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() != COLUMNS.len() {
            return Err(HarnessError::Format {
                line,
                message: format!("expected {} fields, found {}", COLUMNS.len(), record.len()),
            });
        }

        let fields: csv::StringRecord = record
            .iter()
            .enumerate()
            .map(|(i, field)| if i == 0 { field } else { field.trim() })
            .collect();

        let sample: Sample = fields.deserialize(None).map_err(|e| HarnessError::Format {
            line,
            message: e.to_string(),
        })?;
        samples.push(sample);
    }

    Ok(samples)
}

/// Writes samples in the same headerless layout `load_samples` reads.
pub fn write_samples<P: AsRef<Path>>(path: P, samples: &[Sample]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    for sample in samples {
        writer.serialize(sample)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample(algorithm: &str, num_trees: u64, time_ns: u64) -> Sample {
        Sample {
            algorithm: algorithm.to_string(),
            num_trees,
            depth: 2,
            num_features: 50,
            time_ns,
        }
    }

    #[test]
    fn test_load_executable_output() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "Naive Forest, 10, 2, 50, 1200").unwrap();
        writeln!(file, "Compiled Forest, 10, 2, 50, 340").unwrap();

        let samples = load_samples(file.path()).expect("load");
        assert_eq!(
            samples,
            vec![sample("Naive Forest", 10, 1200), sample("Compiled Forest", 10, 340)]
        );
    }

    #[test]
    fn test_load_empty_file() {
        let file = NamedTempFile::new().expect("temp file");
        assert!(load_samples(file.path()).expect("load").is_empty());
    }

    #[test]
    fn test_short_row_is_format_error() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "rf, 10, 2, 50, 100").unwrap();
        writeln!(file, "rf, 10, 2, 50").unwrap();

        match load_samples(file.path()) {
            Err(HarnessError::Format { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_integer_time_is_format_error() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "rf, 10, 2, 50, 1.5").unwrap();

        assert!(matches!(
            load_samples(file.path()),
            Err(HarnessError::Format { line: 1, .. })
        ));
    }

    #[test]
    fn test_write_then_load() {
        let file = NamedTempFile::new().expect("temp file");
        let samples = vec![sample("rf", 10, 100), sample("rf", 10, 80), sample("gbdt", 20, 90)];

        write_samples(file.path(), &samples).expect("write");
        assert_eq!(load_samples(file.path()).expect("load"), samples);
    }

    #[test]
    fn test_algorithm_whitespace_is_kept() {
        let file = NamedTempFile::new().expect("temp file");
        let samples = vec![Sample {
            algorithm: " rf ".to_string(),
            num_trees: 1,
            depth: 1,
            num_features: 1,
            time_ns: 5,
        }];

        write_samples(file.path(), &samples).expect("write");
        assert_eq!(load_samples(file.path()).expect("load"), samples);
    }

    #[test]
    fn test_numeric_padding_is_ignored() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "rf ,  10 , 2,50 ,100  ").unwrap();

        let samples = load_samples(file.path()).expect("load");
        assert_eq!(samples[0].algorithm, "rf ");
        assert_eq!((samples[0].num_trees, samples[0].num_features, samples[0].time_ns), (10, 50, 100));
    }
}
