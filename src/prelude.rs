//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use fuzzy_regression::prelude::*;
//! ```

pub use crate::cluster::{FuzzyCMeans, FuzzyClusterer, FuzzyPartition};
pub use crate::data::Dataset;
pub use crate::error::{FuzzyRegressionError, Result};
pub use crate::linear_model::{WeightedLeastSquares, WeightedSolver};
pub use crate::metrics::{evaluate, FitMetric};
pub use crate::primitives::{Matrix, Vector};
pub use crate::regression::{
    assemble, derive_weights, FuzzyRegression, PerformanceRecord, PerformanceSink,
    RegressionResult,
};
pub use crate::report::{PerformanceLog, RegressionReport};
pub use crate::synthetic::{
    CorrelatedTupleGenerator, LinearProcessSpec, Seeding, TupleSource, TupleWriter,
};
