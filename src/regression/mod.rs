//! Fuzzy-partition regression.
//!
//! Turns a fuzzy partition of a dataset into a weighted regression over the
//! cluster prototypes:
//!
//! 1. [`derive_weights`] reduces the membership matrix to one weight per
//!    cluster (share of points whose strongest membership is that cluster)
//! 2. [`assemble`] splits each centroid into describing values and the
//!    described value
//! 3. a [`WeightedSolver`](crate::linear_model::WeightedSolver) fits the
//!    coefficients and [`evaluate`](crate::metrics::evaluate) scores them
//!
//! [`FuzzyRegression`] runs the whole thing for one cluster count.

mod centroids;
mod pipeline;
mod weights;

pub use centroids::assemble;
pub use pipeline::{
    FuzzyRegression, PerformanceRecord, PerformanceSink, PhaseTimings, DEFAULT_TOLERANCE,
};
pub use weights::{derive_weights, hard_assignments};

use crate::primitives::Vector;

/// Coefficients recovered for one cluster count, plus their fit score.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionResult {
    /// One coefficient per describing attribute.
    pub coefficients: Vector<f64>,
    /// R² or mean squared residual, depending on the configured metric.
    pub fit_score: f64,
}
