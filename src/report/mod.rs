//! Semicolon-delimited result and performance files.
//!
//! A sweep over cluster counts writes one [`RegressionReport`] row and one
//! [`PerformanceLog`] row per successful run. Both writers own their
//! destination and release it when dropped, so an early `?` return never
//! leaks a handle.

use crate::error::{FuzzyRegressionError, Result};
use crate::regression::{PerformanceRecord, PerformanceSink, RegressionResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header of the fit column in the results file.
pub const FIT_COLUMN: &str = "Regression Error";

/// Header of the performance file, in column order.
pub const PERFORMANCE_HEADER: [&str; 7] = [
    "Number of Data",
    "Number of attributes",
    "Number of clusters",
    "FCM duration",
    "Data preparation duration",
    "Regression duration",
    "Error calculation duration",
];

fn semicolon_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(writer)
}

/// Results file: `Cluster size;X1;..;Xd;Regression Error`, then one row per
/// cluster count.
///
/// # Examples
///
/// ```
/// use fuzzy_regression::primitives::Vector;
/// use fuzzy_regression::regression::RegressionResult;
/// use fuzzy_regression::report::RegressionReport;
///
/// let mut buffer = Vec::new();
/// {
///     let mut report = RegressionReport::new(&mut buffer, 2).unwrap();
///     let result = RegressionResult {
///         coefficients: Vector::from_slice(&[2.0, -0.5]),
///         fit_score: 0.75,
///     };
///     report.write_row(3, &result).unwrap();
///     report.flush().unwrap();
/// }
/// let text = String::from_utf8(buffer).unwrap();
/// assert_eq!(text, "Cluster size;X1;X2;Regression Error\n3;2;-0.5;0.75\n");
/// ```
#[derive(Debug)]
pub struct RegressionReport<W: Write = File> {
    writer: csv::Writer<W>,
    n_describing: usize,
}

impl RegressionReport<File> {
    /// Creates (or truncates) `path` and writes the header.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file can't be created, `Csv` if the header can't
    /// be written.
    pub fn create(path: &Path, n_describing: usize) -> Result<Self> {
        Self::new(File::create(path)?, n_describing)
    }
}

impl<W: Write> RegressionReport<W> {
    /// Wraps `writer` and writes the header for `n_describing` coefficients.
    ///
    /// # Errors
    ///
    /// Returns `Csv` if the header can't be written.
    pub fn new(writer: W, n_describing: usize) -> Result<Self> {
        let mut writer = semicolon_writer(writer);
        let mut header = Vec::with_capacity(n_describing + 2);
        header.push("Cluster size".to_string());
        header.extend((1..=n_describing).map(|i| format!("X{i}")));
        header.push(FIT_COLUMN.to_string());
        writer.write_record(&header)?;
        Ok(Self {
            writer,
            n_describing,
        })
    }

    /// Appends `k;coef_1;..;coef_d;fit`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` when the coefficient count differs from
    /// the header, `Csv` on write failure.
    pub fn write_row(&mut self, n_clusters: usize, result: &RegressionResult) -> Result<()> {
        if result.coefficients.len() != self.n_describing {
            return Err(FuzzyRegressionError::dimension_mismatch(
                "report coefficients",
                self.n_describing,
                result.coefficients.len(),
            ));
        }
        let mut row = Vec::with_capacity(self.n_describing + 2);
        row.push(n_clusters.to_string());
        row.extend(result.coefficients.iter().map(f64::to_string));
        row.push(result.fit_score.to_string());
        self.writer.write_record(&row)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Io` if flushing fails.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Performance file: one row of phase durations (nanoseconds) per run.
///
/// The data preparation column is assembly plus weighting time.
#[derive(Debug)]
pub struct PerformanceLog<W: Write = File> {
    writer: csv::Writer<W>,
}

impl PerformanceLog<File> {
    /// Creates (or truncates) `path` and writes the header.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file can't be created, `Csv` if the header can't
    /// be written.
    pub fn create(path: &Path) -> Result<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> PerformanceLog<W> {
    /// # Errors
    ///
    /// Returns `Csv` if the header can't be written.
    pub fn new(writer: W) -> Result<Self> {
        let mut writer = semicolon_writer(writer);
        writer.write_record(PERFORMANCE_HEADER)?;
        Ok(Self { writer })
    }

    /// # Errors
    ///
    /// Returns `Io` if flushing fails.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> PerformanceSink for PerformanceLog<W> {
    fn record(&mut self, record: &PerformanceRecord) -> Result<()> {
        let timings = &record.timings;
        self.writer.write_record([
            record.rows.to_string(),
            record.attributes.to_string(),
            record.clusters.to_string(),
            timings.clustering.as_nanos().to_string(),
            timings.preparation().as_nanos().to_string(),
            timings.solve.as_nanos().to_string(),
            timings.evaluation.as_nanos().to_string(),
        ])?;
        Ok(())
    }
}
