pub mod slice;
pub mod trellis;

use crate::dataset::Record;
use crate::grid::Axis;

/// Which end of an axis a view pins to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extremum {
    Max,
    Min,
}

impl Extremum {
    pub const ALL: [Extremum; 2] = [Extremum::Max, Extremum::Min];

    pub fn name(self) -> &'static str {
        match self {
            Extremum::Max => "max",
            Extremum::Min => "min",
        }
    }

    /// Extremum of `axis` over the whole reduced dataset.
    pub fn of(self, records: &[Record], axis: Axis) -> Option<u64> {
        let values = records.iter().map(|r| r.get(axis));
        match self {
            Extremum::Max => values.max(),
            Extremum::Min => values.min(),
        }
    }
}

/// Sorted distinct values of `axis` in `records`.
pub fn distinct_values(records: &[Record], axis: Axis) -> Vec<u64> {
    let mut values: Vec<u64> = records.iter().map(|r| r.get(axis)).collect();
    values.sort_unstable();
    values.dedup();
    values
}

/// Sorted distinct algorithm names in `records`.
pub fn distinct_algorithms(records: &[Record]) -> Vec<String> {
    let mut algorithms: Vec<String> = records.iter().map(|r| r.algorithm.clone()).collect();
    algorithms.sort();
    algorithms.dedup();
    algorithms
}
