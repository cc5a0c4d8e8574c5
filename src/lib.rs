//! Fuzzy regression: linear regression over fuzzy cluster prototypes.
//!
//! The crate generates synthetic data with a known multivariate linear
//! ground truth, soft-clusters a dataset, and recovers the linear
//! relationship by a weighted regression over the cluster centroids. Each
//! centroid is weighted by the share of points whose strongest membership
//! it holds.
//!
//! # Quick Start
//!
//! ```
//! use fuzzy_regression::prelude::*;
//!
//! // described = 2*x0 - x1 + noise
//! let spec = LinearProcessSpec::new(vec![2.0, -1.0], vec![0.01, 0.01], 0.5, 100.0).unwrap();
//! let mut generator = CorrelatedTupleGenerator::new(spec, Seeding::Fixed(42));
//! let tuples: Vec<Vec<f64>> = (0..200).map(|_| generator.generate_tuple()).collect();
//! let dataset = Dataset::from_matrix(Matrix::from_rows(&tuples).unwrap());
//!
//! let result = FuzzyRegression::new(&dataset, 6)
//!     .with_clusterer(FuzzyCMeans::new().with_random_state(7))
//!     .run(None)
//!     .unwrap();
//!
//! assert!((result.coefficients[0] - 2.0).abs() < 0.1);
//! assert!((result.coefficients[1] + 1.0).abs() < 0.1);
//! assert!(result.fit_score > 0.99);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`synthetic`]: Correlated tuple generator and tuple writer
//! - [`data`]: Whitespace-delimited dataset reader
//! - [`cluster`]: Fuzzy clustering contract and Fuzzy C-Means
//! - [`linear_model`]: Weighted least squares
//! - [`metrics`]: R² and mean squared residual
//! - [`regression`]: Partition weighting, centroid assembly and the pipeline
//! - [`report`]: Results and performance files

pub mod cluster;
pub mod data;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod prelude;
pub mod primitives;
pub mod regression;
pub mod report;
pub mod synthetic;

pub use error::{FuzzyRegressionError, Result};
pub use primitives::{Matrix, Vector};
