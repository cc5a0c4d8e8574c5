// =========================================================================
// Fit metric contract: R², mean squared residual and `evaluate`.
// =========================================================================

use super::*;
use crate::primitives::{Matrix, Vector};

/// R² = 1.0 for perfect predictions
#[test]
fn r2_perfect() {
    let y = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let r2 = r_squared(&y, &y);
    assert!(
        (r2 - 1.0).abs() < 1e-12,
        "R²={r2} for perfect predictions, expected 1.0"
    );
}

/// R² ≤ 1.0 always
#[test]
fn r2_upper_bound() {
    let y_true = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let y_pred = Vector::from_slice(&[1.1, 2.2, 2.8, 4.1, 4.9]);
    let r2 = r_squared(&y_pred, &y_true);
    assert!(r2 <= 1.0 + 1e-12, "R²={r2} > 1.0");
}

/// R² < 0 when predictions are worse than the mean
#[test]
fn r2_negative_for_bad_predictions() {
    let y_true = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let y_pred = Vector::from_slice(&[10.0, 20.0, 30.0, 40.0, 50.0]);
    assert!(r_squared(&y_pred, &y_true) < 0.0);
}

/// Constant targets leave R² undefined
#[test]
fn r2_constant_target_is_nan() {
    let y_true = Vector::from_slice(&[3.0, 3.0, 3.0]);
    let y_pred = Vector::from_slice(&[1.0, 2.0, 3.0]);
    assert!(r_squared(&y_pred, &y_true).is_nan());
}

/// MSR is the mean of squared residuals
#[test]
fn msr_known_value() {
    let y_true = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let y_pred = Vector::from_slice(&[2.0, 2.0, 1.0]);
    // (1 + 0 + 4) / 3
    let msr = mean_squared_residual(&y_pred, &y_true);
    assert!((msr - 5.0 / 3.0).abs() < 1e-12);
}

#[test]
fn evaluate_perfect_fit_r2_is_one() {
    let x = Matrix::from_vec(3, 2, vec![1.0, 0.0, 0.0, 1.0, 2.0, 3.0]).expect("3x2");
    let beta = Vector::from_slice(&[4.0, -1.0]);
    let y = x.matvec(&beta).expect("compatible");
    let r2 = evaluate(&x, &y, &beta, FitMetric::RSquared).expect("valid shapes");
    assert!((r2 - 1.0).abs() < 1e-12);
    let msr = evaluate(&x, &y, &beta, FitMetric::MeanSquaredResidual).expect("valid shapes");
    assert!(msr.abs() < 1e-12);
}

#[test]
fn evaluate_is_deterministic() {
    let x = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).expect("4x1");
    let y = Vector::from_slice(&[2.1, 3.9, 6.2, 7.8]);
    let beta = Vector::from_slice(&[1.97]);
    for metric in [FitMetric::RSquared, FitMetric::MeanSquaredResidual] {
        let a = evaluate(&x, &y, &beta, metric).expect("valid shapes");
        let b = evaluate(&x, &y, &beta, metric).expect("valid shapes");
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn evaluate_msr_divides_by_cluster_count() {
    let x = Matrix::from_vec(2, 1, vec![1.0, 1.0]).expect("2x1");
    let y = Vector::from_slice(&[1.0, 3.0]);
    let beta = Vector::from_slice(&[2.0]);
    let msr = evaluate(&x, &y, &beta, FitMetric::MeanSquaredResidual).expect("valid shapes");
    assert!((msr - 1.0).abs() < 1e-12);
}

#[test]
fn evaluate_shape_errors() {
    let x = Matrix::from_vec(2, 2, vec![1.0, 0.0, 0.0, 1.0]).expect("2x2");
    let y = Vector::from_slice(&[1.0, 1.0]);
    assert!(evaluate(&x, &y, &Vector::from_slice(&[1.0]), FitMetric::RSquared).is_err());
    assert!(evaluate(
        &x,
        &Vector::from_slice(&[1.0]),
        &Vector::from_slice(&[1.0, 1.0]),
        FitMetric::RSquared
    )
    .is_err());
    assert!(matches!(
        evaluate(
            &Matrix::<f64>::zeros(0, 2),
            &Vector::from_vec(vec![]),
            &Vector::from_slice(&[1.0, 1.0]),
            FitMetric::MeanSquaredResidual
        ),
        Err(FuzzyRegressionError::Data { .. })
    ));
}

#[test]
fn fit_metric_parse_and_display() {
    assert_eq!("r-squared".parse::<FitMetric>().expect("known"), FitMetric::RSquared);
    assert_eq!("MSR".parse::<FitMetric>().expect("known"), FitMetric::MeanSquaredResidual);
    assert!("median".parse::<FitMetric>().is_err());
    assert_eq!(FitMetric::default(), FitMetric::RSquared);
    assert_eq!(FitMetric::MeanSquaredResidual.to_string(), "mean-squared-residual");
}
