//! Fuzzy C-Means (Bezdek) clustering.

use super::{FuzzyClusterer, FuzzyPartition};
use crate::error::{FuzzyRegressionError, Result};
use crate::primitives::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{trace, warn};

/// Fuzzy C-Means clustering.
///
/// # Algorithm
///
/// 1. Draw a random membership matrix and normalise each column to sum 1
/// 2. Centroids: `v_j = Σ_i u_ji^m x_i / Σ_i u_ji^m`
/// 3. Memberships: `u_ji = d_ji^(-2/(m-1)) / Σ_l d_li^(-2/(m-1))`
/// 4. Stop when the Frobenius norm of the membership change is below the
///    tolerance, or after `max_iter` iterations
///
/// A point lying exactly on a centroid gets full membership in it.
///
/// # Examples
///
/// ```
/// use fuzzy_regression::cluster::{FuzzyCMeans, FuzzyClusterer};
/// use fuzzy_regression::primitives::Matrix;
///
/// let data = Matrix::from_vec(6, 2, vec![
///     1.0, 1.0, 1.1, 1.0, 1.0, 1.1,
///     9.0, 9.0, 9.1, 9.0, 9.0, 9.1,
/// ]).unwrap();
///
/// let fcm = FuzzyCMeans::new().with_random_state(42);
/// let partition = fcm.partition(&data, 2, 1e-8).unwrap();
/// assert_eq!(partition.memberships.shape(), (2, 6));
/// assert_eq!(partition.centroids.len(), 2);
/// ```
///
/// # Performance
///
/// - Time complexity: O(nkdi) where n=samples, k=clusters, d=features, i=iterations
/// - Space complexity: O(nk)
#[derive(Debug, Clone)]
pub struct FuzzyCMeans {
    /// Fuzzifier `m > 1`.
    fuzziness: f64,
    /// Maximum iterations.
    max_iter: usize,
    /// Random seed for the initial memberships.
    random_state: Option<u64>,
}

impl Default for FuzzyCMeans {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyCMeans {
    /// Creates FCM with `m = 2`, 1000 iterations and entropy seeding.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fuzziness: 2.0,
            max_iter: 1000,
            random_state: None,
        }
    }

    /// Sets the fuzzifier `m`.
    #[must_use]
    pub fn with_fuzziness(mut self, fuzziness: f64) -> Self {
        self.fuzziness = fuzziness;
        self
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the random seed for reproducibility.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    #[must_use]
    pub fn fuzziness(&self) -> f64 {
        self.fuzziness
    }

    #[must_use]
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    fn validate(&self, data: &Matrix<f64>, n_clusters: usize, tol: f64) -> Result<()> {
        let n_samples = data.n_rows();
        if n_samples == 0 || data.n_cols() == 0 {
            return Err(FuzzyRegressionError::empty_input("clustering data"));
        }
        if n_clusters == 0 || n_clusters > n_samples {
            return Err(FuzzyRegressionError::InvalidHyperparameter {
                param: "n_clusters".to_string(),
                value: n_clusters.to_string(),
                constraint: format!("1..={n_samples}"),
            });
        }
        if !(tol.is_finite() && tol > 0.0) {
            return Err(FuzzyRegressionError::InvalidHyperparameter {
                param: "tol".to_string(),
                value: tol.to_string(),
                constraint: "> 0".to_string(),
            });
        }
        if !(self.fuzziness.is_finite() && self.fuzziness > 1.0) {
            return Err(FuzzyRegressionError::InvalidHyperparameter {
                param: "fuzziness".to_string(),
                value: self.fuzziness.to_string(),
                constraint: "> 1".to_string(),
            });
        }
        if self.max_iter == 0 {
            return Err(FuzzyRegressionError::InvalidHyperparameter {
                param: "max_iter".to_string(),
                value: "0".to_string(),
                constraint: ">= 1".to_string(),
            });
        }
        Ok(())
    }

    /// Random column-stochastic `k × n` membership matrix.
    fn initial_memberships(&self, n_clusters: usize, n_samples: usize) -> Matrix<f64> {
        let mut rng = match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut u = Matrix::zeros(n_clusters, n_samples);
        for i in 0..n_samples {
            let draws: Vec<f64> = (0..n_clusters)
                .map(|_| rng.gen_range(f64::EPSILON..1.0))
                .collect();
            let total: f64 = draws.iter().sum();
            for (j, draw) in draws.into_iter().enumerate() {
                u.set(j, i, draw / total);
            }
        }
        u
    }

    /// Weighted means of the data under `u^m`.
    fn update_centroids(
        &self,
        data: &Matrix<f64>,
        u: &Matrix<f64>,
        previous: Option<&[Vec<f64>]>,
    ) -> Vec<Vec<f64>> {
        let (n_samples, n_features) = data.shape();
        let n_clusters = u.n_rows();
        let mut centroids = Vec::with_capacity(n_clusters);

        for j in 0..n_clusters {
            let mut numerator = vec![0.0; n_features];
            let mut denominator = 0.0;
            for i in 0..n_samples {
                let w = u.get(j, i).powf(self.fuzziness);
                denominator += w;
                for (acc, x) in numerator.iter_mut().zip(data.row_slice(i)) {
                    *acc += w * x;
                }
            }

            if denominator > 0.0 {
                for acc in &mut numerator {
                    *acc /= denominator;
                }
                centroids.push(numerator);
            } else {
                // No mass left on this cluster; keep its last position.
                let kept = previous
                    .and_then(|p| p.get(j).cloned())
                    .unwrap_or(numerator);
                centroids.push(kept);
            }
        }

        centroids
    }

    /// Membership update from point-to-centroid distances.
    fn update_memberships(&self, data: &Matrix<f64>, centroids: &[Vec<f64>]) -> Matrix<f64> {
        let n_samples = data.n_rows();
        let n_clusters = centroids.len();
        let exponent = 1.0 / (self.fuzziness - 1.0);
        let mut u = Matrix::zeros(n_clusters, n_samples);
        let mut inverse = vec![0.0; n_clusters];

        for i in 0..n_samples {
            let point = data.row_slice(i);
            let mut coincident = None;

            for (j, centroid) in centroids.iter().enumerate() {
                let dist_sq: f64 = point
                    .iter()
                    .zip(centroid)
                    .map(|(x, v)| (x - v).powi(2))
                    .sum();
                // d^(-2/(m-1)) == (d^2)^(-1/(m-1))
                let value = dist_sq.powf(-exponent);
                if !value.is_finite() {
                    coincident = Some(j);
                    break;
                }
                inverse[j] = value;
            }

            if let Some(j) = coincident {
                u.set(j, i, 1.0);
                continue;
            }

            let total: f64 = inverse.iter().sum();
            for (j, value) in inverse.iter().enumerate() {
                u.set(j, i, value / total);
            }
        }

        u
    }
}

impl FuzzyClusterer for FuzzyCMeans {
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` for `n_clusters` outside `1..=n`, a
    /// non-positive tolerance, `m <= 1` or `max_iter == 0`, and `Data` for
    /// empty input.
    fn partition(
        &self,
        data: &Matrix<f64>,
        n_clusters: usize,
        tol: f64,
    ) -> Result<FuzzyPartition> {
        self.validate(data, n_clusters, tol)?;

        let mut memberships = self.initial_memberships(n_clusters, data.n_rows());
        let mut centroids = self.update_centroids(data, &memberships, None);
        let mut converged = false;
        let mut n_iter = 0;
        let mut delta = f64::INFINITY;

        while n_iter < self.max_iter {
            n_iter += 1;
            let next = self.update_memberships(data, &centroids);
            delta = next.frobenius_distance(&memberships)?;
            memberships = next;
            centroids = self.update_centroids(data, &memberships, Some(&centroids));
            trace!(iteration = n_iter, delta, "fcm iteration");

            if delta < tol {
                converged = true;
                break;
            }
        }

        if !converged {
            warn!(
                iterations = n_iter,
                delta, tol, n_clusters, "fuzzy c-means stopped before reaching tolerance"
            );
        }

        Ok(FuzzyPartition {
            memberships,
            centroids,
            n_iter,
            converged,
        })
    }
}
