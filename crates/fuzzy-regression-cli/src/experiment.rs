//! `--generate` and `--process` drivers.

use crate::config::ExperimentConfig;
use crate::error::Result;
use fuzzy_regression::cluster::FuzzyCMeans;
use fuzzy_regression::data::Dataset;
use fuzzy_regression::regression::{FuzzyRegression, PerformanceRecord, PerformanceSink};
use fuzzy_regression::report::{PerformanceLog, RegressionReport};
use fuzzy_regression::synthetic::{CorrelatedTupleGenerator, Seeding, TupleWriter};
use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result directory name format (local time).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Writes every configured dataset into the data directory.
///
/// Dataset `i` is seeded with `seed + i` when a seed is configured.
pub(crate) fn generate_test_data(config: &ExperimentConfig) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&config.data_dir)?;

    let mut written = Vec::with_capacity(config.datasets.len());
    for (idx, recipe) in config.datasets.iter().enumerate() {
        let seeding = Seeding::from_option(config.seed.map(|s| s.wrapping_add(idx as u64)));
        let mut generator = CorrelatedTupleGenerator::new(recipe.spec()?, seeding);
        let path = config.data_dir.join(&recipe.file_name);
        TupleWriter::new(&mut generator, recipe.tuples).write_to_path(&path)?;
        written.push(path);
    }
    Ok(written)
}

/// Runs the cluster-count sweep over every file in the data directory.
///
/// Results go to a fresh `<results_dir>/<YYYY-mm-dd_HH-MM-SS>/` directory,
/// which is returned.
pub(crate) fn process_data(config: &ExperimentConfig) -> Result<PathBuf> {
    let stamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    let results_path = config.results_dir.join(stamp);
    fs::create_dir_all(&results_path)?;

    let mut files = Vec::new();
    for entry in fs::read_dir(&config.data_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            files.push(entry.path());
        }
    }
    files.sort();

    for file in &files {
        process_single_file(file, &results_path, config);
    }
    info!(
        files = files.len(),
        results = %results_path.display(),
        "processing finished"
    );
    Ok(results_path)
}

/// Sweeps one dataset file and returns the number of report rows written.
///
/// A file whose outputs can't be created, or which doesn't parse, is
/// skipped with a warning. A failed cluster count is logged and the sweep
/// moves on.
pub(crate) fn process_single_file(
    data_file: &Path,
    results_path: &Path,
    config: &ExperimentConfig,
) -> usize {
    let stem = data_file
        .file_stem()
        .unwrap_or_else(|| OsStr::new("dataset"))
        .to_string_lossy();

    let perf_path = results_path.join(format!("{stem}_perf.txt"));
    let mut perf_log = match PerformanceLog::create(&perf_path) {
        Ok(log) => log,
        Err(e) => {
            warn!(file = %data_file.display(), error = %e, "could not create performance file, skipping");
            return 0;
        }
    };

    let dataset = match Dataset::from_path(data_file) {
        Ok(dataset) => dataset,
        Err(e) => {
            warn!(file = %data_file.display(), error = %e, "could not read dataset, skipping");
            return 0;
        }
    };
    if dataset.n_attributes() < 2 {
        warn!(
            file = %data_file.display(),
            attributes = dataset.n_attributes(),
            "dataset needs at least one describing column, skipping"
        );
        return 0;
    }

    let report_path = results_path.join(format!("{stem}_results.txt"));
    let mut report = match RegressionReport::create(&report_path, dataset.n_attributes() - 1) {
        Ok(report) => report,
        Err(e) => {
            warn!(file = %data_file.display(), error = %e, "could not create results file, skipping");
            return 0;
        }
    };

    let rows = sweep(&dataset, &mut report, &mut perf_log, config, data_file);

    if let Err(e) = report.flush().and_then(|()| perf_log.flush()) {
        warn!(file = %data_file.display(), error = %e, "could not flush output files");
    }
    info!(file = %data_file.display(), rows, "processed dataset");
    rows
}

/// Runs every cluster count for `dataset` and returns the rows written.
///
/// A run's performance row is written only after its report row, so the
/// two outputs stay in step when either write fails.
fn sweep<R: Write, P: Write>(
    dataset: &Dataset,
    report: &mut RegressionReport<R>,
    perf_log: &mut PerformanceLog<P>,
    config: &ExperimentConfig,
    data_file: &Path,
) -> usize {
    let n_describing = dataset.n_attributes().saturating_sub(1);
    if config.min_clusters < n_describing {
        info!(
            file = %data_file.display(),
            n_describing,
            "cluster counts below {n_describing} leave the regression underdetermined and will be skipped"
        );
    }

    let mut rows = 0;
    let mut pending: Vec<PerformanceRecord> = Vec::with_capacity(1);
    for n_clusters in config.min_clusters..config.cluster_limit(dataset.n_rows()) {
        let mut clusterer = FuzzyCMeans::new();
        if let Some(seed) = config.seed {
            clusterer = clusterer.with_random_state(seed);
        }
        let pipeline = FuzzyRegression::new(dataset, n_clusters)
            .with_tolerance(config.tolerance)
            .with_fit_metric(config.fit_metric)
            .with_clusterer(clusterer);

        pending.clear();
        let written = pipeline
            .run(Some(&mut pending))
            .and_then(|result| report.write_row(n_clusters, &result))
            .and_then(|()| pending.iter().try_for_each(|record| perf_log.record(record)));
        match written {
            Ok(()) => rows += 1,
            Err(e) => warn!(file = %data_file.display(), n_clusters, error = %e, "cluster count failed"),
        }
    }
    rows
}
