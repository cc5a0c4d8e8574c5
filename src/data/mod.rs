//! Tabular datasets read from whitespace-delimited text.
//!
//! Each non-blank line is one observation; every line must carry the same
//! number of numeric attributes. The last attribute is the described value
//! by convention, although the reader itself does not care.

use crate::error::{FuzzyRegressionError, Result};
use crate::primitives::Matrix;
use std::path::Path;

/// An immutable `n_rows × n_attributes` table of observations.
///
/// # Examples
///
/// ```
/// use fuzzy_regression::data::Dataset;
///
/// let ds = Dataset::parse("1.0 2.0 3.0\n4.0 5.0 6.0\n").expect("well-formed rows");
/// assert_eq!(ds.n_rows(), 2);
/// assert_eq!(ds.n_attributes(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    values: Matrix<f64>,
}

impl Dataset {
    /// Wraps an existing matrix.
    #[must_use]
    pub fn from_matrix(values: Matrix<f64>) -> Self {
        Self { values }
    }

    /// Reads a dataset file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file can't be read, `Parse` if a line is malformed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses whitespace-delimited rows.
    ///
    /// # Errors
    ///
    /// Returns `Parse` on a non-numeric or non-finite field or a row whose
    /// width differs from the first row, and `Data` if there are no rows at
    /// all.
    pub fn parse(content: &str) -> Result<Self> {
        let mut width: Option<usize> = None;
        let mut data = Vec::new();
        let mut n_rows = 0;

        for (line_idx, line) in content.lines().enumerate() {
            let line_num = line_idx + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut row_width = 0;
            for field in line.split_whitespace() {
                let value: f64 = field.parse().map_err(|_| FuzzyRegressionError::Parse {
                    line: line_num,
                    message: format!("'{field}' is not a number"),
                })?;
                if !value.is_finite() {
                    return Err(FuzzyRegressionError::Parse {
                        line: line_num,
                        message: format!("'{field}' is not a finite number"),
                    });
                }
                data.push(value);
                row_width += 1;
            }

            match width {
                None => width = Some(row_width),
                Some(expected) if expected != row_width => {
                    return Err(FuzzyRegressionError::Parse {
                        line: line_num,
                        message: format!("expected {expected} values, found {row_width}"),
                    });
                }
                Some(_) => {}
            }
            n_rows += 1;
        }

        let n_cols = width.ok_or_else(|| FuzzyRegressionError::empty_input("dataset"))?;
        Ok(Self {
            values: Matrix::from_vec(n_rows, n_cols, data)?,
        })
    }

    /// Number of observations.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.values.n_rows()
    }

    /// Number of attributes per observation (describing + described).
    #[must_use]
    pub fn n_attributes(&self) -> usize {
        self.values.n_cols()
    }

    /// Row-major view of the observations.
    #[must_use]
    pub fn values(&self) -> &Matrix<f64> {
        &self.values
    }
}
