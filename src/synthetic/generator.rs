//! Correlated-tuple generator for a known linear process.

use super::{Tuple, TupleSource};
use crate::error::{FuzzyRegressionError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Parameters of the linear process `described = Σ slope_i·x_i + noise`.
///
/// # Examples
///
/// ```
/// use fuzzy_regression::synthetic::LinearProcessSpec;
///
/// let spec = LinearProcessSpec::new(vec![5.0, 3.0], vec![0.001, 0.003], 2.0, 1000.0).unwrap();
/// assert_eq!(spec.n_describing(), 2);
///
/// // One half-width per slope is required.
/// assert!(LinearProcessSpec::new(vec![5.0, 3.0], vec![0.001], 2.0, 1000.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearProcessSpec {
    slopes: Vec<f64>,
    half_widths: Vec<f64>,
    intercept_half_width: f64,
    domain_max: f64,
}

impl LinearProcessSpec {
    /// Validates and builds a process specification.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if `slopes` and `half_widths` differ in length,
    /// if there are no slopes, if any half-width is negative or not finite,
    /// or if `domain_max` is not a positive finite number.
    pub fn new(
        slopes: Vec<f64>,
        half_widths: Vec<f64>,
        intercept_half_width: f64,
        domain_max: f64,
    ) -> Result<Self> {
        if slopes.len() != half_widths.len() {
            return Err(FuzzyRegressionError::configuration(format!(
                "incompatible number of slopes ({}) and half-widths ({})",
                slopes.len(),
                half_widths.len()
            )));
        }
        if slopes.is_empty() {
            return Err(FuzzyRegressionError::configuration(
                "at least one slope is required",
            ));
        }
        if let Some(bad) = slopes.iter().find(|s| !s.is_finite()) {
            return Err(FuzzyRegressionError::configuration(format!(
                "slope {bad} is not finite"
            )));
        }
        let valid_width = |w: f64| w.is_finite() && w >= 0.0;
        if let Some(bad) = half_widths.iter().find(|w| !valid_width(**w)) {
            return Err(FuzzyRegressionError::configuration(format!(
                "half-width {bad} must be finite and >= 0"
            )));
        }
        if !valid_width(intercept_half_width) {
            return Err(FuzzyRegressionError::configuration(format!(
                "intercept half-width {intercept_half_width} must be finite and >= 0"
            )));
        }
        if !(domain_max.is_finite() && domain_max > 0.0) {
            return Err(FuzzyRegressionError::configuration(format!(
                "domain upper bound {domain_max} must be finite and > 0"
            )));
        }

        Ok(Self {
            slopes,
            half_widths,
            intercept_half_width,
            domain_max,
        })
    }

    /// Slope coefficients, one per describing dimension.
    #[must_use]
    pub fn slopes(&self) -> &[f64] {
        &self.slopes
    }

    /// Noise half-widths, paired with [`Self::slopes`].
    #[must_use]
    pub fn half_widths(&self) -> &[f64] {
        &self.half_widths
    }

    #[must_use]
    pub fn intercept_half_width(&self) -> f64 {
        self.intercept_half_width
    }

    #[must_use]
    pub fn domain_max(&self) -> f64 {
        self.domain_max
    }

    /// Number of describing dimensions `d`.
    #[must_use]
    pub fn n_describing(&self) -> usize {
        self.slopes.len()
    }
}

/// How the generator's random engine is seeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seeding {
    /// Seed from operating-system entropy; runs are not reproducible.
    #[default]
    Entropy,
    /// Seed from a fixed value; identical seeds give identical sequences.
    Fixed(u64),
}

impl Seeding {
    /// `Fixed(seed)` when a seed is given, otherwise `Entropy`.
    #[must_use]
    pub fn from_option(seed: Option<u64>) -> Self {
        seed.map_or(Self::Entropy, Self::Fixed)
    }

    fn rng(self) -> StdRng {
        match self {
            Self::Entropy => StdRng::from_entropy(),
            Self::Fixed(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

/// One generated observation with its noise terms kept apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Describing values `x_0..x_{d-1}`.
    pub describing: Vec<f64>,
    /// Described value including all noise.
    pub described: f64,
    /// Per-dimension deviations `e_i`.
    pub deviations: Vec<f64>,
    /// Shared intercept noise term.
    pub intercept_noise: f64,
}

impl Sample {
    /// Flattens into `(x_0, ..., x_{d-1}, described)`.
    #[must_use]
    pub fn into_tuple(self) -> Tuple {
        let mut tuple = self.describing;
        tuple.push(self.described);
        tuple
    }
}

/// Draws tuples from a [`LinearProcessSpec`].
///
/// The generator owns its random engine; each call advances it. One producer
/// at a time: share across threads only behind external synchronisation.
///
/// # Examples
///
/// ```
/// use fuzzy_regression::synthetic::{CorrelatedTupleGenerator, LinearProcessSpec, Seeding};
///
/// let spec = LinearProcessSpec::new(vec![2.0], vec![0.0], 0.0, 10.0).unwrap();
/// let mut generator = CorrelatedTupleGenerator::new(spec, Seeding::Fixed(42));
///
/// let tuple = generator.generate_tuple();
/// assert!((tuple[1] - 2.0 * tuple[0]).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct CorrelatedTupleGenerator {
    spec: LinearProcessSpec,
    rng: StdRng,
}

impl CorrelatedTupleGenerator {
    /// Creates a generator with the given seeding strategy.
    #[must_use]
    pub fn new(spec: LinearProcessSpec, seeding: Seeding) -> Self {
        Self {
            spec,
            rng: seeding.rng(),
        }
    }

    #[must_use]
    pub fn spec(&self) -> &LinearProcessSpec {
        &self.spec
    }

    /// Draws one observation, keeping the noise terms visible.
    pub fn sample(&mut self) -> Sample {
        let d = self.spec.n_describing();
        let mut describing = Vec::with_capacity(d);
        let mut deviations = Vec::with_capacity(d);
        let mut described = 0.0;

        for (&slope, &half_width) in self.spec.slopes.iter().zip(&self.spec.half_widths) {
            let x = self.rng.gen_range(0.0..self.spec.domain_max);
            let deviation = self.rng.gen_range(-half_width..=half_width);
            described += slope * x + deviation;
            describing.push(x);
            deviations.push(deviation);
        }

        let h = self.spec.intercept_half_width;
        let intercept_noise = self.rng.gen_range(-h..=h);
        described += intercept_noise;

        Sample {
            describing,
            described,
            deviations,
            intercept_noise,
        }
    }

    /// Draws one tuple `(x_0, ..., x_{d-1}, described)`.
    pub fn generate_tuple(&mut self) -> Tuple {
        self.sample().into_tuple()
    }
}

impl TupleSource for CorrelatedTupleGenerator {
    fn generate_tuple(&mut self) -> Tuple {
        CorrelatedTupleGenerator::generate_tuple(self)
    }
}

impl Iterator for CorrelatedTupleGenerator {
    type Item = Tuple;

    fn next(&mut self) -> Option<Tuple> {
        Some(CorrelatedTupleGenerator::generate_tuple(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_dim_spec() -> LinearProcessSpec {
        LinearProcessSpec::new(
            vec![5.0, 3.0, 4.0, 5.0, 3.0],
            vec![0.001, 0.003, 0.004, 0.005, 0.003],
            2.0,
            1000.0,
        )
        .expect("valid spec")
    }

    #[test]
    fn test_spec_length_mismatch() {
        let err = LinearProcessSpec::new(vec![1.0, 2.0], vec![0.1], 0.0, 1.0).unwrap_err();
        assert!(matches!(err, FuzzyRegressionError::Configuration { .. }));
        assert!(err.to_string().contains("incompatible"));
    }

    #[test]
    fn test_spec_rejects_bad_domain() {
        assert!(LinearProcessSpec::new(vec![1.0], vec![0.1], 0.0, 0.0).is_err());
        assert!(LinearProcessSpec::new(vec![1.0], vec![0.1], 0.0, -3.0).is_err());
        assert!(LinearProcessSpec::new(vec![1.0], vec![0.1], 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_spec_rejects_negative_half_width() {
        assert!(LinearProcessSpec::new(vec![1.0], vec![-0.1], 0.0, 1.0).is_err());
        assert!(LinearProcessSpec::new(vec![1.0], vec![0.1], -1.0, 1.0).is_err());
        assert!(LinearProcessSpec::new(vec![1.0], vec![f64::NAN], 0.0, 1.0).is_err());
    }

    #[test]
    fn test_spec_rejects_empty() {
        assert!(LinearProcessSpec::new(vec![], vec![], 0.0, 1.0).is_err());
    }

    #[test]
    fn test_tuple_length() {
        let mut generator = CorrelatedTupleGenerator::new(five_dim_spec(), Seeding::Fixed(1));
        for _ in 0..50 {
            assert_eq!(generator.generate_tuple().len(), 6);
        }
    }

    #[test]
    fn test_sample_bounds() {
        let spec = five_dim_spec();
        let mut generator = CorrelatedTupleGenerator::new(spec.clone(), Seeding::Fixed(3));
        for _ in 0..500 {
            let sample = generator.sample();
            for (x, e) in sample.describing.iter().zip(&sample.deviations) {
                assert!((0.0..1000.0).contains(x), "x = {x} outside domain");
                assert!(e.abs() <= 0.005 + f64::EPSILON, "deviation {e} too large");
            }
            for (e, h) in sample.deviations.iter().zip(spec.half_widths()) {
                assert!(e.abs() <= *h);
            }
            assert!(sample.intercept_noise.abs() <= 2.0);
        }
    }

    #[test]
    fn test_described_is_sum_of_contributions() {
        let spec = five_dim_spec();
        let mut generator = CorrelatedTupleGenerator::new(spec.clone(), Seeding::Fixed(11));
        let sample = generator.sample();
        let expected: f64 = spec
            .slopes()
            .iter()
            .zip(&sample.describing)
            .zip(&sample.deviations)
            .map(|((s, x), e)| s * x + e)
            .sum::<f64>()
            + sample.intercept_noise;
        assert!((sample.described - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zero_noise_is_exact() {
        let spec = LinearProcessSpec::new(vec![2.0], vec![0.0], 0.0, 10.0).expect("valid spec");
        let mut generator = CorrelatedTupleGenerator::new(spec, Seeding::Fixed(5));
        for tuple in generator.by_ref().take(200) {
            assert!((tuple[1] - 2.0 * tuple[0]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_fixed_seed_reproducible() {
        let mut a = CorrelatedTupleGenerator::new(five_dim_spec(), Seeding::Fixed(42));
        let mut b = CorrelatedTupleGenerator::new(five_dim_spec(), Seeding::Fixed(42));
        for _ in 0..20 {
            assert_eq!(a.generate_tuple(), b.generate_tuple());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = CorrelatedTupleGenerator::new(five_dim_spec(), Seeding::Fixed(1));
        let mut b = CorrelatedTupleGenerator::new(five_dim_spec(), Seeding::Fixed(2));
        assert_ne!(a.generate_tuple(), b.generate_tuple());
    }

    #[test]
    fn test_entropy_seeds_differ() {
        let mut a = CorrelatedTupleGenerator::new(five_dim_spec(), Seeding::Entropy);
        let mut b = CorrelatedTupleGenerator::new(five_dim_spec(), Seeding::default());
        let run_a: Vec<Tuple> = a.by_ref().take(5).collect();
        let run_b: Vec<Tuple> = b.by_ref().take(5).collect();
        assert_ne!(run_a, run_b);
    }

    #[test]
    fn test_seeding_from_option() {
        assert_eq!(Seeding::from_option(Some(9)), Seeding::Fixed(9));
        assert_eq!(Seeding::from_option(None), Seeding::Entropy);
    }
}
