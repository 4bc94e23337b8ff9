use crate::dataset::Record;
use crate::grid::Axis;
use crate::views::{distinct_algorithms, distinct_values, Extremum};

/// Which depths a trellis keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthFilter {
    At(Extremum),
    Even,
}

/// A faceted scatter view: one panel per (row value, column value).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrellisSpec {
    pub name: &'static str,
    pub filter: DepthFilter,
    pub rows: Axis,
    pub columns: Axis,
    pub x: Axis,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrellisView {
    pub name: String,
    pub rows: Vec<u64>,    // Distinct values of the row axis, ascending
    pub columns: Vec<u64>, // Distinct values of the column axis, ascending
    pub algorithms: Vec<String>,
    pub records: Vec<Record>,
    pub row_axis: Axis,
    pub column_axis: Axis,
    pub x_axis: Axis,
}

impl TrellisSpec {
    fn new(name: &'static str, filter: DepthFilter) -> Self {
        TrellisSpec {
            name,
            filter,
            rows: Axis::NumFeatures,
            columns: Axis::Depth,
            x: Axis::NumTrees,
        }
    }

    pub fn select(&self, records: &[Record]) -> TrellisView {
        let target = match self.filter {
            DepthFilter::At(extremum) => extremum.of(records, Axis::Depth),
            DepthFilter::Even => None,
        };

        let selected: Vec<Record> = records
            .iter()
            .filter(|r| match self.filter {
                DepthFilter::At(_) => Some(r.depth) == target,
                DepthFilter::Even => r.depth % 2 == 0,
            })
            .cloned()
            .collect();

        TrellisView {
            name: self.name.to_string(),
            rows: distinct_values(&selected, self.rows),
            columns: distinct_values(&selected, self.columns),
            algorithms: distinct_algorithms(&selected),
            records: selected,
            row_axis: self.rows,
            column_axis: self.columns,
            x_axis: self.x,
        }
    }
}

impl TrellisView {
    /// Records of the panel at (`row`, `column`).
    pub fn panel(&self, row: u64, column: u64) -> impl Iterator<Item = &Record> + '_ {
        self.records
            .iter()
            .filter(move |r| r.get(self.row_axis) == row && r.get(self.column_axis) == column)
    }
}

/// The three fixed trellis views.
pub fn trellis_specs() -> Vec<TrellisSpec> {
    vec![
        TrellisSpec::new("max_depth_trellis", DepthFilter::At(Extremum::Max)),
        TrellisSpec::new("min_depth_trellis", DepthFilter::At(Extremum::Min)),
        TrellisSpec::new("all_trellis", DepthFilter::Even),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(algorithm: &str, num_trees: u64, depth: u64, num_features: u64) -> Record {
        Record {
            algorithm: algorithm.to_string(),
            num_trees,
            depth,
            num_features,
            min_time_ns: num_trees * depth + num_features,
        }
    }

    fn dataset() -> Vec<Record> {
        let mut records = Vec::new();
        for depth in 1..=4 {
            for &num_features in &[50, 100] {
                records.push(record("rf", 10, depth, num_features));
                records.push(record("gbdt", 20, depth, num_features));
            }
        }
        records
    }

    #[test]
    fn test_three_fixed_specs() {
        let specs = trellis_specs();
        let names: Vec<&str> = specs.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["max_depth_trellis", "min_depth_trellis", "all_trellis"]);
        assert!(specs.iter().all(|s| s.rows == Axis::NumFeatures && s.columns == Axis::Depth));
    }

    #[test]
    fn test_max_depth() {
        let view = trellis_specs()[0].select(&dataset());
        assert!(view.records.iter().all(|r| r.depth == 4));
        assert_eq!(view.columns, vec![4]);
        assert_eq!(view.rows, vec![50, 100]);
        assert_eq!(view.records.len(), 4);
    }

    #[test]
    fn test_min_depth() {
        let view = trellis_specs()[1].select(&dataset());
        assert_eq!(view.columns, vec![1]);
        assert_eq!(view.algorithms, vec!["gbdt".to_string(), "rf".to_string()]);
    }

    #[test]
    fn test_even_depths() {
        let view = trellis_specs()[2].select(&dataset());
        assert_eq!(view.columns, vec![2, 4]);
        assert_eq!(view.records.len(), 8);

        let panel: Vec<&Record> = view.panel(100, 2).collect();
        assert_eq!(panel.len(), 2);
        assert!(panel.iter().all(|r| r.num_features == 100 && r.depth == 2));
    }

    #[test]
    fn test_no_even_depths() {
        let records = vec![record("rf", 10, 1, 50), record("rf", 10, 3, 50)];
        let view = trellis_specs()[2].select(&records);
        assert!(view.records.is_empty());
        assert!(view.rows.is_empty() && view.columns.is_empty());
    }
}
