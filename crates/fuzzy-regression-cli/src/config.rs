//! Experiment configuration, optionally loaded from TOML.

use crate::error::{CliError, Result};
use fuzzy_regression::metrics::FitMetric;
use fuzzy_regression::regression::DEFAULT_TOLERANCE;
use fuzzy_regression::synthetic::LinearProcessSpec;
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_intercept_half_width() -> f64 {
    2.0
}

fn default_domain_max() -> f64 {
    1000.0
}

/// How to generate one synthetic dataset file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DatasetRecipe {
    /// File name inside the data directory.
    pub(crate) file_name: String,
    pub(crate) slopes: Vec<f64>,
    pub(crate) half_widths: Vec<f64>,
    #[serde(default = "default_intercept_half_width")]
    pub(crate) intercept_half_width: f64,
    #[serde(default = "default_domain_max")]
    pub(crate) domain_max: f64,
    /// Number of tuples to write.
    pub(crate) tuples: usize,
}

impl DatasetRecipe {
    fn new(file_name: &str, slopes: &[f64], half_widths: &[f64], tuples: usize) -> Self {
        Self {
            file_name: file_name.to_string(),
            slopes: slopes.to_vec(),
            half_widths: half_widths.to_vec(),
            intercept_half_width: default_intercept_half_width(),
            domain_max: default_domain_max(),
            tuples,
        }
    }

    /// Builds the generator parameters.
    pub(crate) fn spec(&self) -> fuzzy_regression::Result<LinearProcessSpec> {
        LinearProcessSpec::new(
            self.slopes.clone(),
            self.half_widths.clone(),
            self.intercept_half_width,
            self.domain_max,
        )
    }

    fn default_recipes() -> Vec<Self> {
        vec![
            Self::new(
                "fiveDescriptionVariables.txt",
                &[5.0, 3.0, 4.0, 5.0, 3.0],
                &[0.001, 0.003, 0.004, 0.005, 0.003],
                1000,
            ),
            Self::new(
                "tenDescriptionVariables.txt",
                &[5.0, -23.0, 4.0, -8.0, 3.0, 53.1, 0.2, -1337.3, 90.0, 123.0],
                &[0.001, 0.003, 0.004, 0.005, 0.003, 0.001, 0.001, 0.001, 0.001, 0.001],
                1000,
            ),
            Self::new(
                "twoDescriptionVariables.txt",
                &[0.2, -1337.3],
                &[0.001, 0.003],
                400,
            ),
            Self::new(
                "fourDescriptionVariables.txt",
                &[3.0, 53.1, 90.0, 123.0],
                &[0.001, 0.003, 0.004, 0.005],
                300,
            ),
        ]
    }
}

/// Settings for `--generate` and `--process`.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ExperimentConfig {
    /// Where datasets are written and read.
    pub(crate) data_dir: PathBuf,
    /// Root of the timestamped result directories.
    pub(crate) results_dir: PathBuf,
    /// First cluster count of the sweep.
    pub(crate) min_clusters: usize,
    /// Exclusive upper bound of the sweep, further capped by the row count.
    pub(crate) max_clusters: usize,
    /// Clustering convergence tolerance.
    pub(crate) tolerance: f64,
    pub(crate) fit_metric: FitMetric,
    /// Fixed seed for generation and clustering; entropy when absent.
    pub(crate) seed: Option<u64>,
    pub(crate) datasets: Vec<DatasetRecipe>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            results_dir: PathBuf::from("results"),
            min_clusters: 2,
            max_clusters: 50,
            tolerance: DEFAULT_TOLERANCE,
            fit_metric: FitMetric::default(),
            seed: None,
            datasets: DatasetRecipe::default_recipes(),
        }
    }
}

impl ExperimentConfig {
    /// Loads `path`, or the defaults when no path is given.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    CliError::Config(format!(
                        "Failed to read config file {}: {e}",
                        path.display()
                    ))
                })?;
                Self::parse(&content)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CliError::Config(format!("Failed to parse config file: {e}")))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.min_clusters == 0 {
            return Err(CliError::Config("min_clusters must be at least 1".into()));
        }
        if self.max_clusters <= self.min_clusters {
            return Err(CliError::Config(format!(
                "max_clusters ({}) must exceed min_clusters ({})",
                self.max_clusters, self.min_clusters
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(CliError::Config(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        for recipe in &self.datasets {
            if recipe.file_name.trim().is_empty() {
                return Err(CliError::Config("dataset file_name is empty".into()));
            }
            recipe
                .spec()
                .map_err(|e| CliError::Config(format!("dataset {}: {e}", recipe.file_name)))?;
        }
        Ok(())
    }

    /// Exclusive upper bound of the sweep for a dataset with `n_rows` rows.
    pub(crate) fn cluster_limit(&self, n_rows: usize) -> usize {
        self.max_clusters.min(n_rows)
    }
}
