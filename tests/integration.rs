//! Integration tests for the fuzzy regression library.
//!
//! These tests verify end-to-end workflows: generate, write, read back,
//! cluster, regress and report.

use fuzzy_regression::prelude::*;
use std::fs;

fn generate_dataset(spec: LinearProcessSpec, n: usize, seed: u64) -> (tempfile::TempDir, Dataset) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.txt");
    let mut generator = CorrelatedTupleGenerator::new(spec, Seeding::Fixed(seed));
    TupleWriter::new(&mut generator, n)
        .write_to_path(&path)
        .expect("write dataset");
    let dataset = Dataset::from_path(&path).expect("read dataset");
    (dir, dataset)
}

#[test]
fn test_noise_free_line_is_exact() {
    let spec = LinearProcessSpec::new(vec![2.0], vec![0.0], 0.0, 10.0).expect("valid spec");
    let mut generator = CorrelatedTupleGenerator::new(spec, Seeding::Fixed(5));
    for _ in 0..100 {
        let tuple = generator.generate_tuple();
        assert!((tuple[1] - 2.0 * tuple[0]).abs() < 1e-9);
    }
}

#[test]
fn test_written_dataset_round_trips_through_reader() {
    let spec =
        LinearProcessSpec::new(vec![5.0, 3.0, 4.0], vec![0.001, 0.003, 0.004], 2.0, 1000.0)
            .expect("valid spec");
    let (_dir, dataset) = generate_dataset(spec.clone(), 50, 9);
    assert_eq!(dataset.n_rows(), 50);
    assert_eq!(dataset.n_attributes(), 4);

    // same seed regenerates the same values
    let mut generator = CorrelatedTupleGenerator::new(spec, Seeding::Fixed(9));
    let first = generator.generate_tuple();
    assert_eq!(dataset.values().row_slice(0), first.as_slice());
}

#[test]
fn test_pipeline_recovers_slopes() {
    let spec = LinearProcessSpec::new(vec![3.0, -2.0], vec![0.001, 0.003], 2.0, 1000.0)
        .expect("valid spec");
    let (_dir, dataset) = generate_dataset(spec, 300, 21);

    let mut records: Vec<PerformanceRecord> = Vec::new();
    let result = FuzzyRegression::new(&dataset, 8)
        .with_clusterer(FuzzyCMeans::new().with_random_state(4))
        .run(Some(&mut records))
        .expect("pipeline succeeds");

    assert_eq!(result.coefficients.len(), 2);
    assert!((result.coefficients[0] - 3.0).abs() < 0.05, "{:?}", result.coefficients);
    assert!((result.coefficients[1] + 2.0).abs() < 0.05, "{:?}", result.coefficients);
    assert!(result.fit_score > 0.999);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rows, 300);
    assert_eq!(records[0].attributes, 3);
    assert_eq!(records[0].clusters, 8);
}

#[test]
fn test_sweep_writes_report_and_performance_log() {
    let spec = LinearProcessSpec::new(vec![1.5], vec![0.01], 0.5, 100.0).expect("valid spec");
    let (dir, dataset) = generate_dataset(spec, 80, 2);

    let report_path = dir.path().join("data_results.txt");
    let perf_path = dir.path().join("data_perf.txt");
    {
        let mut report =
            RegressionReport::create(&report_path, dataset.n_attributes() - 1).expect("report");
        let mut perf = PerformanceLog::create(&perf_path).expect("perf log");
        for k in 2..6 {
            let result = FuzzyRegression::new(&dataset, k)
                .with_clusterer(FuzzyCMeans::new().with_random_state(k as u64))
                .with_fit_metric(FitMetric::MeanSquaredResidual)
                .run(Some(&mut perf))
                .expect("pipeline succeeds");
            report.write_row(k, &result).expect("row");
        }
        report.flush().expect("flush");
        perf.flush().expect("flush");
    }

    let report = fs::read_to_string(&report_path).expect("read report");
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Cluster size;X1;Regression Error");
    for (line, k) in lines[1..].iter().zip(2..) {
        let fields: Vec<&str> = line.split(';').collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], k.to_string());
        let slope: f64 = fields[1].parse().expect("numeric coefficient");
        assert!((slope - 1.5).abs() < 0.05);
    }

    let perf = fs::read_to_string(&perf_path).expect("read perf");
    assert_eq!(perf.lines().count(), 5);
    for line in perf.lines().skip(1) {
        assert!(line.starts_with("80;2;"));
        assert_eq!(line.split(';').count(), 7);
    }
}

/// Hands back a fixed partition regardless of the data.
struct FixedPartition(FuzzyPartition);

impl FuzzyClusterer for FixedPartition {
    fn partition(&self, _data: &Matrix<f64>, _k: usize, _tol: f64) -> Result<FuzzyPartition> {
        Ok(self.0.clone())
    }
}

#[test]
fn test_constant_described_value_gives_nan_r2() {
    let rows: String = (0..3).map(|i| format!("{} 5\n", i + 1)).collect();
    let dataset = Dataset::parse(&rows).expect("well-formed rows");
    let memberships = Matrix::from_vec(3, 3, vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
        .expect("3x3");
    let centroids = vec![vec![1.0, 5.0], vec![2.0, 5.0], vec![3.0, 5.0]];

    let pipeline = FuzzyRegression::new(&dataset, 3)
        .with_clusterer(FixedPartition(FuzzyPartition::new(memberships, centroids)));
    let result = pipeline.run(None).expect("pipeline succeeds");
    assert!(result.fit_score.is_nan());

    let msr = pipeline
        .with_fit_metric(FitMetric::MeanSquaredResidual)
        .run(None)
        .expect("pipeline succeeds");
    assert!(msr.fit_score.is_finite());
}

#[test]
fn test_more_clusters_than_rows_fails() {
    let dataset = Dataset::parse("1 2\n2 4\n").expect("well-formed rows");
    assert!(FuzzyRegression::new(&dataset, 3).run(None).is_err());
}
