//! Hard assignment and per-cluster weights.

use crate::error::{FuzzyRegressionError, Result};
use crate::primitives::{Matrix, Vector};

/// Assigns every point to the cluster with its largest membership.
///
/// `memberships` is `k × n` (clusters × points). Cluster 0 is the baseline;
/// a later cluster only takes a point on a strictly larger membership, so
/// ties go to the lowest cluster index.
///
/// # Errors
///
/// Returns `Data` if the matrix has no clusters or no points.
///
/// # Examples
///
/// ```
/// use fuzzy_regression::primitives::Matrix;
/// use fuzzy_regression::regression::hard_assignments;
///
/// let u = Matrix::from_vec(2, 3, vec![
///     0.9, 0.5, 0.2,
///     0.1, 0.5, 0.8,
/// ]).unwrap();
/// assert_eq!(hard_assignments(&u).unwrap(), vec![0, 0, 1]);
/// ```
pub fn hard_assignments(memberships: &Matrix<f64>) -> Result<Vec<usize>> {
    let (n_clusters, n_points) = memberships.shape();
    if n_clusters == 0 || n_points == 0 {
        return Err(FuzzyRegressionError::empty_input("partition matrix"));
    }

    let mut best: Vec<(usize, f64)> = memberships
        .row_slice(0)
        .iter()
        .map(|&u| (0, u))
        .collect();

    for cluster in 1..n_clusters {
        for (slot, &u) in best.iter_mut().zip(memberships.row_slice(cluster)) {
            if u > slot.1 {
                *slot = (cluster, u);
            }
        }
    }

    Ok(best.into_iter().map(|(cluster, _)| cluster).collect())
}

/// Derives one weight per cluster: the fraction of points hard-assigned to it.
///
/// Weights sum to 1 up to rounding. A cluster that wins no point gets
/// weight 0.
///
/// # Errors
///
/// Returns `Data` if the matrix has no clusters or no points.
///
/// # Examples
///
/// ```
/// use fuzzy_regression::primitives::Matrix;
/// use fuzzy_regression::regression::derive_weights;
///
/// let u = Matrix::from_vec(2, 2, vec![0.9, 0.1, 0.1, 0.9]).unwrap();
/// let w = derive_weights(&u).unwrap();
/// assert_eq!(w.as_slice(), &[0.5, 0.5]);
/// ```
///
/// # Performance
///
/// - Time complexity: O(k·n)
pub fn derive_weights(memberships: &Matrix<f64>) -> Result<Vector<f64>> {
    let assignments = hard_assignments(memberships)?;

    let mut counts = vec![0usize; memberships.n_rows()];
    for cluster in &assignments {
        counts[*cluster] += 1;
    }

    let n_points = assignments.len() as f64;
    Ok(counts
        .into_iter()
        .map(|count| count as f64 / n_points)
        .collect::<Vec<_>>()
        .into())
}
