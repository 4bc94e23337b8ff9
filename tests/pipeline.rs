#![cfg(unix)]

use forest_benchmark_rs::aggregate::aggregate;
use forest_benchmark_rs::dataset::load_samples;
use forest_benchmark_rs::error::HarnessError;
use forest_benchmark_rs::grid::ParameterGrid;
use forest_benchmark_rs::plots::{generate_plots, PlotSelection};
use forest_benchmark_rs::render::{RenderContext, DEFAULT_SIZE};
use forest_benchmark_rs::runner::ExternalRunner;
use forest_benchmark_rs::sweep::run_sweep;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

// Mimics the benchmark executable: three timed iterations for two variants,
// diagnostics on stderr.
const FAKE_BENCHMARK: &str = r#"
echo "Distribution of time taken" >&2
for i in 1 2 3; do
  echo "Naive Forest, $3, $5, $7, $(( $3 * $5 + $i ))"
  echo "Compiled Forest, $3, $5, $7, $(( $3 + $i ))"
done
"#;

fn grid() -> ParameterGrid {
    ParameterGrid::new(vec![10.0, 20.0], vec![1.0, 2.0], vec![50.0, 100.0]).unwrap()
}

#[test]
fn sweep_then_plot() {
    let dir = tempdir().expect("temp dir");
    let raw = dir.path().join("raw.csv");
    let mut runner = ExternalRunner::new("sh").with_leading_args(["-c", FAKE_BENCHMARK, "sh"]);
    let mut rng = StdRng::seed_from_u64(3);

    let report = run_sweep(&grid(), &mut runner, &mut rng, &raw).expect("sweep");
    assert_eq!(report.runs, 8);
    assert_eq!(report.rows, 8 * 6);

    let samples = load_samples(&raw).expect("load");
    let records = aggregate(&samples);
    assert_eq!(records.len(), 8 * 2);
    let naive = records
        .iter()
        .find(|r| r.algorithm == "Naive Forest" && r.num_trees == 20 && r.depth == 2 && r.num_features == 50)
        .expect("naive record");
    assert_eq!(naive.min_time_ns, 41);

    let plots = dir.path().join("plots");
    std::fs::create_dir(&plots).unwrap();
    let mut ctx = RenderContext::new(&plots, DEFAULT_SIZE);
    let artifacts = generate_plots(&raw, PlotSelection { trellis: true, slices: true }, &mut ctx)
        .expect("plots");

    assert_eq!(artifacts.len(), 9);
    assert!(plots.join("depth at min num_trees, num_features.svg").exists());
    assert!(plots.join("max_depth_trellis.svg").exists());
    assert!(plots.join("min_depth_trellis.svg").exists());
    assert!(plots.join("all_trellis.svg").exists());
}

#[test]
fn failing_benchmark_aborts_sweep() {
    let dir = tempdir().expect("temp dir");
    let raw = dir.path().join("raw.csv");
    let script = r#"if [ "$5" = "2" ]; then exit 4; fi; echo "Naive Forest, $3, $5, $7, 1""#;
    let mut runner = ExternalRunner::new("sh").with_leading_args(["-c", script, "sh"]);
    let mut rng = StdRng::seed_from_u64(11);

    match run_sweep(&grid(), &mut runner, &mut rng, &raw) {
        Err(HarnessError::Execution { combination, status }) => {
            assert_eq!(combination.depth, 2);
            assert_eq!(status.code(), Some(4));
        }
        other => panic!("expected execution error, got {:?}", other),
    }
    assert!(!raw.exists());
}
