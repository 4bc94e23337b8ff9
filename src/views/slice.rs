use crate::dataset::Record;
use crate::grid::Axis;
use crate::views::{distinct_algorithms, Extremum};

/// An axis held at one end of its range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pin {
    pub axis: Axis,
    pub extremum: Extremum,
}

/// A line view: `min_time_ns` against `free_axis`, with the other two axes
/// pinned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SliceSpec {
    pub name: String,
    pub free_axis: Axis,
    pub pins: [Pin; 2],
}

/// One line of a slice view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub algorithm: String,
    pub points: Vec<(u64, u64)>, // (free axis value, min_time_ns), ascending in x
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SliceView {
    pub name: String,
    pub free_axis: Axis,
    pub records: Vec<Record>,
    pub lines: Vec<Line>,
}

impl SliceSpec {
    pub fn new(free_axis: Axis, extremum: Extremum) -> Self {
        let [first, second] = free_axis.others();
        SliceSpec {
            name: format!("{} at {} {}, {}", free_axis, extremum.name(), first, second),
            free_axis,
            pins: [
                Pin { axis: first, extremum },
                Pin { axis: second, extremum },
            ],
        }
    }

    /// Rows whose pinned axes sit at their dataset-wide extremum, grouped
    /// into one line per algorithm.
    pub fn select(&self, records: &[Record]) -> SliceView {
        let targets: Vec<(Axis, Option<u64>)> = self
            .pins
            .iter()
            .map(|pin| (pin.axis, pin.extremum.of(records, pin.axis)))
            .collect();

        let selected: Vec<Record> = records
            .iter()
            .filter(|r| targets.iter().all(|&(axis, target)| Some(r.get(axis)) == target))
            .cloned()
            .collect();

        let lines = distinct_algorithms(&selected)
            .into_iter()
            .map(|algorithm| {
                let mut points: Vec<(u64, u64)> = selected
                    .iter()
                    .filter(|r| r.algorithm == algorithm)
                    .map(|r| (r.get(self.free_axis), r.min_time_ns))
                    .collect();
                points.sort_unstable();
                Line { algorithm, points }
            })
            .collect();

        SliceView {
            name: self.name.clone(),
            free_axis: self.free_axis,
            records: selected,
            lines,
        }
    }
}

/// Every free axis crossed with every extremum.
pub fn slice_specs() -> Vec<SliceSpec> {
    Axis::ALL
        .into_iter()
        .flat_map(|free_axis| {
            Extremum::ALL
                .into_iter()
                .map(move |extremum| SliceSpec::new(free_axis, extremum))
        })
        .collect()
}
