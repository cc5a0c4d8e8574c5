//! Single-cluster-count regression run with per-phase timing.

use super::{assemble, derive_weights, RegressionResult};
use crate::cluster::{FuzzyCMeans, FuzzyClusterer, FuzzyPartition};
use crate::data::Dataset;
use crate::error::{FuzzyRegressionError, Result};
use crate::linear_model::{WeightedLeastSquares, WeightedSolver};
use crate::metrics::{evaluate, FitMetric};
use std::time::{Duration, Instant};
use tracing::debug;

/// Clustering convergence tolerance used unless overridden.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Wall-clock duration of each pipeline phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTimings {
    pub clustering: Duration,
    pub assembly: Duration,
    pub weighting: Duration,
    pub solve: Duration,
    pub evaluation: Duration,
}

impl PhaseTimings {
    /// Assembly plus weighting, i.e. everything between clustering and solving.
    #[must_use]
    pub fn preparation(&self) -> Duration {
        self.assembly + self.weighting
    }
}

/// One performance log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceRecord {
    /// Rows in the dataset.
    pub rows: usize,
    /// Attributes per row (describing values plus the described value).
    pub attributes: usize,
    /// Cluster count of the run.
    pub clusters: usize,
    pub timings: PhaseTimings,
}

/// Destination for [`PerformanceRecord`]s.
pub trait PerformanceSink {
    /// Stores one record.
    ///
    /// # Errors
    ///
    /// Implementations backed by I/O return `Io` or `Csv` on write failure.
    fn record(&mut self, record: &PerformanceRecord) -> Result<()>;
}

impl PerformanceSink for Vec<PerformanceRecord> {
    fn record(&mut self, record: &PerformanceRecord) -> Result<()> {
        self.push(*record);
        Ok(())
    }
}

/// Fuzzy-partition regression for a fixed dataset and cluster count.
///
/// Clusters the dataset, weights each centroid by the share of points it
/// wins, regresses the centroids' described value on their describing
/// values and scores the fit. The clustering and solving services are type
/// parameters so either can be swapped out.
///
/// A sweep over cluster counts builds one instance per count; nothing is
/// shared between runs except the borrowed dataset.
///
/// # Examples
///
/// ```
/// use fuzzy_regression::cluster::FuzzyCMeans;
/// use fuzzy_regression::data::Dataset;
/// use fuzzy_regression::regression::FuzzyRegression;
///
/// // described = 3 * x
/// let rows: String = (0..40)
///     .map(|i| format!("{} {}\n", i as f64, 3.0 * i as f64))
///     .collect();
/// let dataset = Dataset::parse(&rows).unwrap();
///
/// let result = FuzzyRegression::new(&dataset, 4)
///     .with_clusterer(FuzzyCMeans::new().with_random_state(1))
///     .run(None)
///     .unwrap();
/// assert!((result.coefficients[0] - 3.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct FuzzyRegression<'a, C = FuzzyCMeans, S = WeightedLeastSquares> {
    dataset: &'a Dataset,
    n_clusters: usize,
    tolerance: f64,
    fit_metric: FitMetric,
    clusterer: C,
    solver: S,
}

impl<'a> FuzzyRegression<'a> {
    /// Creates a run with FCM, weighted least squares, R² and the default
    /// tolerance.
    #[must_use]
    pub fn new(dataset: &'a Dataset, n_clusters: usize) -> Self {
        Self {
            dataset,
            n_clusters,
            tolerance: DEFAULT_TOLERANCE,
            fit_metric: FitMetric::default(),
            clusterer: FuzzyCMeans::new(),
            solver: WeightedLeastSquares::new(),
        }
    }
}

impl<'a, C, S> FuzzyRegression<'a, C, S>
where
    C: FuzzyClusterer,
    S: WeightedSolver,
{
    /// Sets the clustering convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the fit metric.
    #[must_use]
    pub fn with_fit_metric(mut self, fit_metric: FitMetric) -> Self {
        self.fit_metric = fit_metric;
        self
    }

    /// Replaces the clustering service.
    #[must_use]
    pub fn with_clusterer<C2: FuzzyClusterer>(self, clusterer: C2) -> FuzzyRegression<'a, C2, S> {
        FuzzyRegression {
            dataset: self.dataset,
            n_clusters: self.n_clusters,
            tolerance: self.tolerance,
            fit_metric: self.fit_metric,
            clusterer,
            solver: self.solver,
        }
    }

    /// Replaces the weighted solver.
    #[must_use]
    pub fn with_solver<S2: WeightedSolver>(self, solver: S2) -> FuzzyRegression<'a, C, S2> {
        FuzzyRegression {
            dataset: self.dataset,
            n_clusters: self.n_clusters,
            tolerance: self.tolerance,
            fit_metric: self.fit_metric,
            clusterer: self.clusterer,
            solver,
        }
    }

    /// Cluster count of this run.
    #[must_use]
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Tolerance passed to the clustering service.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Metric used to score the fit.
    #[must_use]
    pub fn fit_metric(&self) -> FitMetric {
        self.fit_metric
    }

    /// Rejects a partition whose memberships don't cover exactly the
    /// dataset's rows or disagree with the centroid count.
    fn check_partition(&self, partition: &FuzzyPartition) -> Result<()> {
        if partition.n_points() != self.dataset.n_rows() {
            return Err(FuzzyRegressionError::data(format!(
                "partition covers {} points, dataset has {} rows",
                partition.n_points(),
                self.dataset.n_rows()
            )));
        }
        if partition.n_clusters() != partition.centroids.len() {
            return Err(FuzzyRegressionError::data(format!(
                "partition has {} membership rows but {} centroids",
                partition.n_clusters(),
                partition.centroids.len()
            )));
        }
        Ok(())
    }

    /// Runs clustering, assembly, weighting, solving and evaluation.
    ///
    /// When `sink` is given, one [`PerformanceRecord`] with the phase
    /// durations is stored after a successful run.
    ///
    /// # Errors
    ///
    /// Clustering and solver errors propagate unchanged. Malformed centroids,
    /// or memberships that don't match the dataset rows or the centroid
    /// count, give `Data`; a failing sink gives its own error. No
    /// partial result is returned.
    pub fn run(&self, sink: Option<&mut dyn PerformanceSink>) -> Result<RegressionResult> {
        let values = self.dataset.values();
        debug!(
            rows = self.dataset.n_rows(),
            attributes = self.dataset.n_attributes(),
            clusters = self.n_clusters,
            "starting fuzzy clustering"
        );

        let start = Instant::now();
        let partition = self
            .clusterer
            .partition(values, self.n_clusters, self.tolerance)?;
        let clustering = start.elapsed();
        self.check_partition(&partition)?;

        let start = Instant::now();
        let (describing, described) = assemble(&partition.centroids)?;
        let assembly = start.elapsed();

        let start = Instant::now();
        let weights = derive_weights(&partition.memberships)?;
        let weighting = start.elapsed();

        let start = Instant::now();
        let coefficients = self.solver.solve(&describing, &described, &weights)?;
        let solve = start.elapsed();

        let start = Instant::now();
        let fit_score = evaluate(&describing, &described, &coefficients, self.fit_metric)?;
        let evaluation = start.elapsed();

        let timings = PhaseTimings {
            clustering,
            assembly,
            weighting,
            solve,
            evaluation,
        };
        debug!(
            clusters = self.n_clusters,
            clustering_ns = timings.clustering.as_nanos() as u64,
            preparation_ns = timings.preparation().as_nanos() as u64,
            solve_ns = timings.solve.as_nanos() as u64,
            evaluation_ns = timings.evaluation.as_nanos() as u64,
            fit_score,
            "fuzzy regression finished"
        );

        if let Some(sink) = sink {
            sink.record(&PerformanceRecord {
                rows: self.dataset.n_rows(),
                attributes: self.dataset.n_attributes(),
                clusters: self.n_clusters,
                timings,
            })?;
        }

        Ok(RegressionResult {
            coefficients,
            fit_score,
        })
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
