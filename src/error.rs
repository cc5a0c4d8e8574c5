//! Error types for fuzzy regression operations.
//!
//! Every fallible operation in the crate returns [`Result`], so callers can
//! propagate failures from generation, clustering, solving and I/O with `?`.

use thiserror::Error;

/// Main error type for fuzzy regression operations.
///
/// # Examples
///
/// ```
/// use fuzzy_regression::error::FuzzyRegressionError;
///
/// let err = FuzzyRegressionError::DimensionMismatch {
///     expected: "slopes=3".to_string(),
///     actual: "2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Error)]
pub enum FuzzyRegressionError {
    /// Invalid construction parameters (e.g. slope and half-width counts differ).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What was wrong with the configuration
        message: String,
    },

    /// Malformed partition, centroid or regression input.
    #[error("Data error: {message}")]
    Data {
        /// What was wrong with the data
        message: String,
    },

    /// Matrix/vector dimensions don't match for the operation.
    #[error("Matrix dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Linear system has no unique solution.
    #[error("Singular matrix in {context}: system is not positive definite")]
    SingularMatrix {
        /// Which solve failed
        context: String,
    },

    /// Invalid hyperparameter value provided.
    #[error("Invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Malformed line in a tabular dataset file.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Error description
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited text read/write error.
    #[error("Delimited text error: {0}")]
    Csv(#[from] csv::Error),
}

impl FuzzyRegressionError {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data error
    #[must_use]
    pub fn data(message: impl Into<String>) -> Self {
        Self::Data {
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Data {
            message: format!("empty input: {context}"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, FuzzyRegressionError>;
