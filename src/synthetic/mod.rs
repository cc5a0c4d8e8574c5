//! Synthetic multivariate linear regression data.
//!
//! A [`CorrelatedTupleGenerator`] draws observations from a known linear
//! process with bounded uniform noise, and a [`TupleWriter`] persists them as
//! whitespace-delimited text that [`crate::data::Dataset`] reads back.
//!
//! # Quick Start
//!
//! ```
//! use fuzzy_regression::synthetic::{CorrelatedTupleGenerator, LinearProcessSpec, Seeding};
//!
//! // described = 2*x0 - x1 + noise
//! let spec = LinearProcessSpec::new(vec![2.0, -1.0], vec![0.01, 0.01], 0.5, 100.0)
//!     .expect("one half-width per slope");
//! let mut generator = CorrelatedTupleGenerator::new(spec, Seeding::Fixed(7));
//!
//! let tuple = generator.generate_tuple();
//! assert_eq!(tuple.len(), 3);
//! ```
//!
//! # Ground truth
//!
//! Every describing value is drawn independently from `[0, domain_max)` and
//! contributes `slope_i * x_i + e_i` to the described value. An earlier form
//! of this process broadcast one shared domain draw to every dimension; that
//! form does not produce a multivariate regression target and is not
//! offered.

mod generator;
mod writer;

pub use generator::{CorrelatedTupleGenerator, LinearProcessSpec, Sample, Seeding};
pub use writer::TupleWriter;

/// One observation: `d` describing values followed by the described value.
pub type Tuple = Vec<f64>;

/// Source of synthetic tuples.
///
/// [`TupleWriter`] drains any implementation; the generator is the one the
/// crate ships.
pub trait TupleSource {
    /// Produces the next tuple, advancing internal state.
    fn generate_tuple(&mut self) -> Tuple;
}
