use prettytable::{row, Table};

use crate::dataset::{Record, Sample};

/// Descriptive statistics of one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std: f64, // Sample standard deviation, NaN below two values
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl Summary {
    pub fn of(values: &[f64]) -> Self {
        let count = values.len();
        if count == 0 {
            return Summary {
                count,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                q25: f64::NAN,
                q50: f64::NAN,
                q75: f64::NAN,
                max: f64::NAN,
            };
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
            variance.sqrt()
        } else {
            f64::NAN
        };

        Summary {
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            q50: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        }
    }
}

/// Linear interpolation between the two closest ranks. `sorted` must be
/// non-empty and ascending.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    sorted[lower] + (sorted[upper] - sorted[lower]) * (position - lower as f64)
}

fn column<T>(items: &[T], f: impl Fn(&T) -> u64) -> Vec<f64> {
    items.iter().map(|item| f(item) as f64).collect()
}

/// Per-column summaries of the raw numeric columns.
pub fn describe_samples(samples: &[Sample]) -> Vec<(&'static str, Summary)> {
    vec![
        ("num_trees", Summary::of(&column(samples, |s| s.num_trees))),
        ("depth", Summary::of(&column(samples, |s| s.depth))),
        ("num_features", Summary::of(&column(samples, |s| s.num_features))),
        ("time_ns", Summary::of(&column(samples, |s| s.time_ns))),
    ]
}

/// Per-column summaries of a reduced dataset.
pub fn describe_records(records: &[Record]) -> Vec<(&'static str, Summary)> {
    vec![
        ("num_trees", Summary::of(&column(records, |r| r.num_trees))),
        ("depth", Summary::of(&column(records, |r| r.depth))),
        ("num_features", Summary::of(&column(records, |r| r.num_features))),
        ("min_time_ns", Summary::of(&column(records, |r| r.min_time_ns))),
    ]
}

/// One row per statistic, one column per dataset column.
pub fn summary_table(summaries: &[(&str, Summary)]) -> Table {
    let mut table = Table::new();

    let mut header = row![""];
    for (name, _) in summaries {
        header.add_cell(prettytable::Cell::new(name));
    }
    table.add_row(header);

    let statistics: [(&str, fn(&Summary) -> f64); 8] = [
        ("count", |s: &Summary| s.count as f64),
        ("mean", |s: &Summary| s.mean),
        ("std", |s: &Summary| s.std),
        ("min", |s: &Summary| s.min),
        ("25%", |s: &Summary| s.q25),
        ("50%", |s: &Summary| s.q50),
        ("75%", |s: &Summary| s.q75),
        ("max", |s: &Summary| s.max),
    ];
    for (label, statistic) in statistics {
        let mut line = row![label];
        for (_, summary) in summaries {
            line.add_cell(prettytable::Cell::new(&format!("{:.3}", statistic(summary))));
        }
        table.add_row(line);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_four_values() {
        let summary = Summary::of(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(summary.count, 4);
        assert!((summary.mean - 2.5).abs() < 1e-9);
        assert!((summary.std - 1.290_994_448_7).abs() < 1e-6);
        assert_eq!(summary.min, 1.0);
        assert!((summary.q25 - 1.75).abs() < 1e-9);
        assert!((summary.q50 - 2.5).abs() < 1e-9);
        assert!((summary.q75 - 3.25).abs() < 1e-9);
        assert_eq!(summary.max, 4.0);
    }

    #[test]
    fn test_summary_of_single_value() {
        let summary = Summary::of(&[7.0]);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.q25, 7.0);
        assert!(summary.std.is_nan());
    }

    #[test]
    fn test_summary_of_nothing() {
        let summary = Summary::of(&[]);
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
    }

    #[test]
    fn test_table_layout() {
        let samples = vec![Sample {
            algorithm: "rf".to_string(),
            num_trees: 10,
            depth: 1,
            num_features: 50,
            time_ns: 100,
        }];
        let table = summary_table(&describe_samples(&samples));
        // Header plus eight statistics
        assert_eq!(table.len(), 9);

        let rendered = table.to_string();
        assert!(rendered.contains("time_ns"));
        assert!(rendered.contains("100.000"));
    }
}
