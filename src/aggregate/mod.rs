use rustc_hash::{FxHashMap, FxHashSet};

use crate::dataset::{Record, Sample};

/// (algorithm, num_trees, depth, num_features)
type IdentityKey<'a> = (&'a str, u64, u64, u64);

fn identity_key(sample: &Sample) -> IdentityKey<'_> {
    (&sample.algorithm, sample.num_trees, sample.depth, sample.num_features)
}

/// Reduces repeated measurements to one record per identity key carrying the
/// minimum `time_ns` of its group. Records keep the order in which their key
/// first appears.
pub fn aggregate(samples: &[Sample]) -> Vec<Record> {
    // Pass 1: minimum per key
    let mut minima: FxHashMap<IdentityKey<'_>, u64> = FxHashMap::default();
    for sample in samples {
        minima
            .entry(identity_key(sample))
            .and_modify(|min| *min = (*min).min(sample.time_ns))
            .or_insert(sample.time_ns);
    }

    // Pass 2: broadcast the minimum, keep the first row of each key
    let mut emitted: FxHashSet<IdentityKey<'_>> = FxHashSet::default();
    let mut records = Vec::with_capacity(minima.len());
    for sample in samples {
        let key = identity_key(sample);
        if emitted.insert(key) {
            records.push(Record {
                algorithm: sample.algorithm.clone(),
                num_trees: sample.num_trees,
                depth: sample.depth,
                num_features: sample.num_features,
                min_time_ns: minima[&key],
            });
        }
    }

    records
}
