//! Weighted linear least squares.
//!
//! The regression pipeline only needs the [`WeightedSolver`] contract;
//! [`WeightedLeastSquares`] solves it through the weighted normal equations.

use crate::error::{FuzzyRegressionError, Result};
use crate::primitives::{Matrix, Vector};

/// Weighted regression service.
pub trait WeightedSolver {
    /// Finds coefficients `β` (one per column of `x`) minimising
    /// `Σ_i w_i (y_i - x_i·β)²`.
    ///
    /// # Errors
    ///
    /// Implementations reject mismatched shapes and systems without a
    /// unique solution.
    fn solve(&self, x: &Matrix<f64>, y: &Vector<f64>, weights: &Vector<f64>)
        -> Result<Vector<f64>>;
}

/// Weighted least squares through the origin.
///
/// Solves `(Xᵀ W X) β = Xᵀ W y` with `W = diag(weights)` via Cholesky
/// decomposition. No intercept column is added, so `β` has exactly one
/// entry per describing column.
///
/// # Examples
///
/// ```
/// use fuzzy_regression::linear_model::{WeightedLeastSquares, WeightedSolver};
/// use fuzzy_regression::primitives::{Matrix, Vector};
///
/// // y = 2*x0 + 3*x1
/// let x = Matrix::from_vec(3, 2, vec![1.0, 0.0, 0.0, 1.0, 1.0, 1.0]).unwrap();
/// let y = Vector::from_slice(&[2.0, 3.0, 5.0]);
/// let w = Vector::from_slice(&[0.2, 0.3, 0.5]);
///
/// let beta = WeightedLeastSquares::new().solve(&x, &y, &w).unwrap();
/// assert!((beta[0] - 2.0).abs() < 1e-9);
/// assert!((beta[1] - 3.0).abs() < 1e-9);
/// ```
///
/// # Performance
///
/// - Time complexity: O(n·p² + p³) where n = rows, p = columns
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedLeastSquares;

impl WeightedLeastSquares {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl WeightedSolver for WeightedLeastSquares {
    /// # Errors
    ///
    /// Returns `DimensionMismatch` when `y` or `weights` don't have one entry
    /// per row, `Data` for empty input or a negative / non-finite weight,
    /// and `SingularMatrix` when `Xᵀ W X` is not positive definite (for
    /// example fewer positively weighted rows than columns).
    fn solve(
        &self,
        x: &Matrix<f64>,
        y: &Vector<f64>,
        weights: &Vector<f64>,
    ) -> Result<Vector<f64>> {
        let (n_rows, n_cols) = x.shape();

        if n_rows == 0 || n_cols == 0 {
            return Err(FuzzyRegressionError::empty_input("regression design matrix"));
        }
        if y.len() != n_rows {
            return Err(FuzzyRegressionError::dimension_mismatch(
                "described values",
                n_rows,
                y.len(),
            ));
        }
        if weights.len() != n_rows {
            return Err(FuzzyRegressionError::dimension_mismatch(
                "weights",
                n_rows,
                weights.len(),
            ));
        }
        if let Some(w) = weights.iter().find(|w| !(w.is_finite() && **w >= 0.0)) {
            return Err(FuzzyRegressionError::data(format!(
                "weight {w} must be finite and >= 0"
            )));
        }

        // Xᵀ W
        let xt_w = x.scale_rows(weights)?.transpose();
        let xtwx = xt_w.matmul(x)?;
        let xtwy = xt_w.matvec(y)?;

        xtwx.cholesky_solve(&xtwy)
            .map_err(|err| match err {
                FuzzyRegressionError::SingularMatrix { .. } => {
                    FuzzyRegressionError::SingularMatrix {
                        context: format!(
                            "weighted normal equations ({n_rows} rows, {n_cols} columns)"
                        ),
                    }
                }
                other => other,
            })
    }
}
