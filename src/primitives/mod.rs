//! Core compute primitives (Vector, Matrix).
//!
//! These types carry datasets, partition matrices and regression inputs
//! through the pipeline.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
