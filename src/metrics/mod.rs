//! Goodness-of-fit metrics for regression over cluster prototypes.
//!
//! [`evaluate`] scores a coefficient vector against describing rows and
//! described values under a selectable [`FitMetric`].

use crate::error::{FuzzyRegressionError, Result};
use crate::primitives::{Matrix, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which score [`evaluate`] reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitMetric {
    /// Coefficient of determination, `1 - SS_res / SS_tot`. The default.
    #[default]
    RSquared,
    /// `SS_res / n`.
    MeanSquaredResidual,
}

impl FitMetric {
    /// Stable identifier used in configuration files and on the command line.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RSquared => "r-squared",
            Self::MeanSquaredResidual => "mean-squared-residual",
        }
    }
}

impl fmt::Display for FitMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitMetric {
    type Err = FuzzyRegressionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "r-squared" | "r2" | "rsquared" => Ok(Self::RSquared),
            "mean-squared-residual" | "msr" | "mse" => Ok(Self::MeanSquaredResidual),
            other => Err(FuzzyRegressionError::InvalidHyperparameter {
                param: "fit_metric".to_string(),
                value: other.to_string(),
                constraint: "r-squared | mean-squared-residual".to_string(),
            }),
        }
    }
}

/// Computes the coefficient of determination (R²).
///
/// R² = 1 - (`SS_res` / `SS_tot`)
///
/// Returns NaN when `SS_tot` is zero (every true value identical), since R²
/// is undefined there.
///
/// # Examples
///
/// ```
/// use fuzzy_regression::metrics::r_squared;
/// use fuzzy_regression::primitives::Vector;
///
/// let y_true = Vector::from_slice(&[3.0, -0.5, 2.0, 7.0]);
/// let y_pred = Vector::from_slice(&[2.5, 0.0, 2.0, 8.0]);
/// assert!(r_squared(&y_pred, &y_true) > 0.9);
///
/// let flat = Vector::from_slice(&[1.0, 1.0]);
/// assert!(r_squared(&flat, &flat).is_nan());
/// ```
///
/// # Panics
///
/// Panics if vectors have different lengths.
#[must_use]
pub fn r_squared(y_pred: &Vector<f64>, y_true: &Vector<f64>) -> f64 {
    assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");

    let y_mean = y_true.mean();
    let ss_res = residual_sum_of_squares(y_pred, y_true);
    let ss_tot: f64 = y_true.iter().map(|t| (t - y_mean).powi(2)).sum();

    if ss_tot == 0.0 || !ss_tot.is_finite() {
        return f64::NAN;
    }

    1.0 - (ss_res / ss_tot)
}

/// Mean squared residual, `Σ (y_true - y_pred)² / n`.
///
/// # Examples
///
/// ```
/// use fuzzy_regression::metrics::mean_squared_residual;
/// use fuzzy_regression::primitives::Vector;
///
/// let y_true = Vector::from_slice(&[1.0, 2.0]);
/// let y_pred = Vector::from_slice(&[1.0, 4.0]);
/// assert!((mean_squared_residual(&y_pred, &y_true) - 2.0).abs() < 1e-12);
/// ```
///
/// # Panics
///
/// Panics if vectors have different lengths or are empty.
#[must_use]
pub fn mean_squared_residual(y_pred: &Vector<f64>, y_true: &Vector<f64>) -> f64 {
    assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");
    assert!(!y_true.is_empty(), "Vectors cannot be empty");

    residual_sum_of_squares(y_pred, y_true) / y_true.len() as f64
}

fn residual_sum_of_squares(y_pred: &Vector<f64>, y_true: &Vector<f64>) -> f64 {
    y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum()
}

/// Scores `coefficients` against cluster-level data.
///
/// The prediction for row `i` is `coefficients · describing[i]` (no
/// intercept). Pure: identical inputs give identical output.
///
/// # Errors
///
/// Returns `Data` when there are no rows, and `DimensionMismatch` when the
/// described vector or the coefficients don't fit the describing matrix.
///
/// # Examples
///
/// ```
/// use fuzzy_regression::metrics::{evaluate, FitMetric};
/// use fuzzy_regression::primitives::{Matrix, Vector};
///
/// let x = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
/// let y = Vector::from_slice(&[2.0, 4.0, 6.0]);
/// let beta = Vector::from_slice(&[2.0]);
///
/// let r2 = evaluate(&x, &y, &beta, FitMetric::RSquared).unwrap();
/// assert!((r2 - 1.0).abs() < 1e-12);
/// ```
pub fn evaluate(
    describing: &Matrix<f64>,
    described: &Vector<f64>,
    coefficients: &Vector<f64>,
    metric: FitMetric,
) -> Result<f64> {
    if describing.n_rows() == 0 {
        return Err(FuzzyRegressionError::empty_input("fit evaluation rows"));
    }
    if described.len() != describing.n_rows() {
        return Err(FuzzyRegressionError::dimension_mismatch(
            "described values",
            describing.n_rows(),
            described.len(),
        ));
    }
    if coefficients.len() != describing.n_cols() {
        return Err(FuzzyRegressionError::dimension_mismatch(
            "coefficients",
            describing.n_cols(),
            coefficients.len(),
        ));
    }

    let predicted = describing.matvec(coefficients)?;

    Ok(match metric {
        FitMetric::RSquared => r_squared(&predicted, described),
        FitMetric::MeanSquaredResidual => mean_squared_residual(&predicted, described),
    })
}

#[cfg(test)]
#[path = "tests_regression_contract.rs"]
mod tests_regression_contract;
