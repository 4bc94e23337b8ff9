use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Combination, ParameterGrid};

/// Cartesian product of the grid: num_trees outermost, then depth, then
/// num_features. Values are truncated toward zero.
pub fn generate(grid: &ParameterGrid) -> impl Iterator<Item = Combination> + '_ {
    grid.num_trees.iter().flat_map(move |&num_trees| {
        grid.depth.iter().flat_map(move |&depth| {
            grid.num_features.iter().map(move |&num_features| Combination {
                num_trees: num_trees as u64,
                depth: depth as u64,
                num_features: num_features as u64,
            })
        })
    })
}

/// Collects the whole input and returns it in a uniformly random order.
pub fn randomize<T, I, R>(items: I, rng: &mut R) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    R: Rng + ?Sized,
{
    let mut items: Vec<T> = items.into_iter().collect();
    items.shuffle(rng);
    items
}
