//! Centroid decomposition into regression inputs.

use crate::error::{FuzzyRegressionError, Result};
use crate::primitives::{Matrix, Vector};

/// Splits cluster centroids into a describing matrix and a described vector.
///
/// Each centroid `[x_0, .., x_{d-1}, y]` contributes the row `[x_0, .., x_{d-1}]`
/// and the value `y`.
///
/// # Errors
///
/// Returns `Data` when there are no centroids, a centroid is shorter than
/// 2, or the centroids differ in length.
///
/// # Examples
///
/// ```
/// use fuzzy_regression::regression::assemble;
///
/// let (x, y) = assemble(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
/// assert_eq!(x.shape(), (2, 2));
/// assert_eq!(x.row_slice(1), &[4.0, 5.0]);
/// assert_eq!(y.as_slice(), &[3.0, 6.0]);
/// ```
pub fn assemble(centroids: &[Vec<f64>]) -> Result<(Matrix<f64>, Vector<f64>)> {
    let first = centroids
        .first()
        .ok_or_else(|| FuzzyRegressionError::empty_input("centroid list"))?;
    let width = first.len();
    if width < 2 {
        return Err(FuzzyRegressionError::data(format!(
            "centroid length {width} leaves no describing values (need at least 2)"
        )));
    }

    let n_describing = width - 1;
    let mut describing = Vec::with_capacity(centroids.len() * n_describing);
    let mut described = Vec::with_capacity(centroids.len());

    for (idx, centroid) in centroids.iter().enumerate() {
        if centroid.len() != width {
            return Err(FuzzyRegressionError::data(format!(
                "centroid {idx} has length {}, expected {width}",
                centroid.len()
            )));
        }
        let (x, y) = centroid.split_at(n_describing);
        describing.extend_from_slice(x);
        described.push(y[0]);
    }

    let describing = Matrix::from_vec(centroids.len(), n_describing, describing)?;
    Ok((describing, Vector::from_vec(described)))
}
