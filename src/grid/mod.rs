use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{HarnessError, Result};

/// The three sweep axes, in the fixed order used for generation and naming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    NumTrees,
    Depth,
    NumFeatures,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::NumTrees, Axis::Depth, Axis::NumFeatures];

    /// Column name of the axis in the persisted dataset.
    pub fn name(self) -> &'static str {
        match self {
            Axis::NumTrees => "num_trees",
            Axis::Depth => "depth",
            Axis::NumFeatures => "num_features",
        }
    }

    /// The two axes other than `self`, in axis order.
    pub fn others(self) -> [Axis; 2] {
        let mut others = [self; 2];
        let mut i = 0;
        for axis in Axis::ALL {
            if axis != self {
                others[i] = axis;
                i += 1;
            }
        }
        others
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One concrete point of the sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Combination {
    pub num_trees: u64,
    pub depth: u64,
    pub num_features: u64,
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "num_trees={}, depth={}, num_features={}",
            self.num_trees, self.depth, self.num_features
        )
    }
}

/// Candidate values for each axis. Values are real numbers and get truncated
/// to integers when combinations are formed.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    pub num_trees: Vec<f64>,
    pub depth: Vec<f64>,
    pub num_features: Vec<f64>,
}

impl ParameterGrid {
    pub fn new(num_trees: Vec<f64>, depth: Vec<f64>, num_features: Vec<f64>) -> Result<Self> {
        let grid = ParameterGrid { num_trees, depth, num_features };
        grid.validate()?;
        Ok(grid)
    }

    /// The sweep the harness runs when no grid file is given.
    pub fn default_sweep() -> Self {
        ParameterGrid {
            num_trees: linspace(10.0, 1000.0, 10),
            depth: linspace(1.0, 6.0, 6),
            num_features: linspace(50.0, 10000.0, 5),
        }
    }

    /// Loads a grid from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let grid: ParameterGrid = serde_json::from_str(&content)?;
        grid.validate()?;
        Ok(grid)
    }

    pub fn values(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::NumTrees => &self.num_trees,
            Axis::Depth => &self.depth,
            Axis::NumFeatures => &self.num_features,
        }
    }

    /// Number of combinations in the Cartesian product.
    pub fn len(&self) -> usize {
        self.num_trees.len() * self.depth.len() * self.num_features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every value must truncate to a `u64` without saturating.
    pub fn validate(&self) -> Result<()> {
        for axis in Axis::ALL {
            for &value in self.values(axis) {
                if !value.is_finite() || value < 0.0 || value >= u64::MAX as f64 {
                    return Err(HarnessError::InvalidGrid(format!(
                        "{} contains {}, values must be finite, non-negative and below 2^64",
                        axis, value
                    )));
                }
            }
        }
        Ok(())
    }
}

/// `num` evenly spaced values over `[start, stop]`, both endpoints included.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            values[num - 1] = stop;
            values
        }
    }
}
