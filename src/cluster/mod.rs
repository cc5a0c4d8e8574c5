//! Fuzzy clustering.
//!
//! The regression pipeline only depends on the [`FuzzyClusterer`] contract:
//! a dataset, a cluster count and a convergence tolerance in, a membership
//! matrix and one centroid per cluster out. [`FuzzyCMeans`] is the
//! implementation the crate ships.

mod fcm;

pub use fcm::FuzzyCMeans;

use crate::error::Result;
use crate::primitives::Matrix;

/// Result of a fuzzy clustering run.
///
/// `memberships` is `k × n` (rows are clusters, columns are points) with
/// entries in `[0, 1]`; each column is expected to sum to 1. `centroids`
/// holds `k` prototypes, each with one coordinate per dataset attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyPartition {
    /// Membership degrees, clusters × points.
    pub memberships: Matrix<f64>,
    /// Cluster prototypes in attribute space.
    pub centroids: Vec<Vec<f64>>,
    /// Iterations performed.
    pub n_iter: usize,
    /// Whether the tolerance was met before the iteration limit.
    pub converged: bool,
}

impl FuzzyPartition {
    /// Wraps a membership matrix and centroid list produced elsewhere.
    #[must_use]
    pub fn new(memberships: Matrix<f64>, centroids: Vec<Vec<f64>>) -> Self {
        Self {
            memberships,
            centroids,
            n_iter: 0,
            converged: true,
        }
    }

    /// Number of clusters `k`.
    #[must_use]
    pub fn n_clusters(&self) -> usize {
        self.memberships.n_rows()
    }

    /// Number of partitioned points `n`.
    #[must_use]
    pub fn n_points(&self) -> usize {
        self.memberships.n_cols()
    }
}

/// Soft clustering service.
pub trait FuzzyClusterer {
    /// Partitions the rows of `data` into `n_clusters` fuzzy clusters.
    ///
    /// # Errors
    ///
    /// Implementations reject `n_clusters == 0`, more clusters than rows, a
    /// non-positive tolerance, and any internal numerical failure.
    fn partition(&self, data: &Matrix<f64>, n_clusters: usize, tol: f64)
        -> Result<FuzzyPartition>;
}
