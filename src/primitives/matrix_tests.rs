pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-12);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-12);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0]);
    assert!(result.is_err());
}

#[test]
fn test_from_rows() {
    let m = Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])
        .expect("equal row lengths");
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.row_slice(2), &[5.0, 6.0]);
}

#[test]
fn test_from_rows_ragged() {
    let result = Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0]]);
    assert!(matches!(
        result,
        Err(FuzzyRegressionError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_from_rows_empty() {
    let m = Matrix::<f64>::from_rows(&[]).expect("empty is valid");
    assert_eq!(m.shape(), (0, 0));
}

#[test]
fn test_transpose() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert!((t.get(0, 1) - 4.0).abs() < 1e-12);
    assert!((t.get(2, 1) - 6.0).abs() < 1e-12);
}

#[test]
fn test_row_and_column() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let row = m.row(1);
    assert_eq!(row.as_slice(), &[4.0, 5.0, 6.0]);
    let col = m.column(1);
    assert_eq!(col.as_slice(), &[2.0, 5.0]);
    assert_eq!(m.rows().count(), 2);
}

#[test]
fn test_matmul() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("2x2");
    let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).expect("2x2");
    let c = a.matmul(&b).expect("compatible dimensions");
    assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
}

#[test]
fn test_matmul_dimension_mismatch() {
    let a = Matrix::<f64>::zeros(2, 3);
    let b = Matrix::<f64>::zeros(2, 3);
    assert!(a.matmul(&b).is_err());
}

#[test]
fn test_matvec() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("2x2");
    let v = Vector::from_slice(&[1.0, 1.0]);
    let r = m.matvec(&v).expect("compatible dimensions");
    assert_eq!(r.as_slice(), &[3.0, 7.0]);
    assert!(m.matvec(&Vector::from_slice(&[1.0])).is_err());
}

#[test]
fn test_scale_rows() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("2x2");
    let scaled = m
        .scale_rows(&Vector::from_slice(&[2.0, 0.5]))
        .expect("one factor per row");
    assert_eq!(scaled.as_slice(), &[2.0, 4.0, 1.5, 2.0]);
    assert!(m.scale_rows(&Vector::from_slice(&[1.0])).is_err());
}

#[test]
fn test_frobenius_distance() {
    let a = Matrix::from_vec(1, 2, vec![0.0, 0.0]).expect("1x2");
    let b = Matrix::from_vec(1, 2, vec![3.0, 4.0]).expect("1x2");
    let d = a.frobenius_distance(&b).expect("same shape");
    assert!((d - 5.0).abs() < 1e-12);
    assert!(a.frobenius_distance(&Matrix::zeros(2, 1)).is_err());
}

#[test]
fn test_cholesky_solve() {
    // [[4, 2], [2, 3]] x = [2, 1]  ->  x = [0.5, 0]
    let a = Matrix::from_vec(2, 2, vec![4.0, 2.0, 2.0, 3.0]).expect("2x2");
    let b = Vector::from_slice(&[2.0, 1.0]);
    let x = a.cholesky_solve(&b).expect("positive definite");
    assert!((x[0] - 0.5).abs() < 1e-12);
    assert!(x[1].abs() < 1e-12);
}

#[test]
fn test_cholesky_singular() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 1.0, 1.0, 1.0]).expect("2x2");
    let b = Vector::from_slice(&[1.0, 1.0]);
    assert!(matches!(
        a.cholesky_solve(&b),
        Err(FuzzyRegressionError::SingularMatrix { .. })
    ));
}

#[test]
fn test_cholesky_not_square() {
    let a = Matrix::<f64>::zeros(2, 3);
    assert!(a.cholesky_solve(&Vector::from_slice(&[1.0, 1.0])).is_err());
}
