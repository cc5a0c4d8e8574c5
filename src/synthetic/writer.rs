//! Persists generated tuples as whitespace-delimited text.

use super::TupleSource;
use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes a fixed number of tuples from a [`TupleSource`] per call.
///
/// Each line holds one tuple, values separated by single spaces, in full
/// round-trip precision.
///
/// # Examples
///
/// ```
/// use fuzzy_regression::synthetic::{CorrelatedTupleGenerator, LinearProcessSpec, Seeding, TupleWriter};
///
/// let spec = LinearProcessSpec::new(vec![1.5], vec![0.0], 0.0, 10.0).unwrap();
/// let mut generator = CorrelatedTupleGenerator::new(spec, Seeding::Fixed(1));
///
/// let mut buffer = Vec::new();
/// TupleWriter::new(&mut generator, 3).write_to(&mut buffer).unwrap();
/// let text = String::from_utf8(buffer).unwrap();
/// assert_eq!(text.lines().count(), 3);
/// ```
#[derive(Debug)]
pub struct TupleWriter<'a, S: TupleSource> {
    source: &'a mut S,
    n_tuples: usize,
}

impl<'a, S: TupleSource> TupleWriter<'a, S> {
    pub fn new(source: &'a mut S, n_tuples: usize) -> Self {
        Self { source, n_tuples }
    }

    /// Generates `n_tuples` tuples into `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or flushing fails.
    pub fn write_to<W: Write>(&mut self, writer: W) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .flexible(true)
            .from_writer(writer);

        for _ in 0..self.n_tuples {
            let tuple = self.source.generate_tuple();
            wtr.write_record(tuple.iter().map(f64::to_string))?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Creates (or truncates) `path` and writes `n_tuples` tuples to it.
    ///
    /// The file handle is released on every return path.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be created or written.
    pub fn write_to_path(&mut self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(file)?;
        info!(path = %path.display(), tuples = self.n_tuples, "wrote synthetic dataset");
        Ok(())
    }
}
