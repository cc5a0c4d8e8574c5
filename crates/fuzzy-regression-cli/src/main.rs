//! fuzzy-regression - synthetic data generation and fuzzy regression sweeps
//!
//! Usage:
//!   fuzzy-regression --generate              # Write the synthetic datasets into data/
//!   fuzzy-regression --process               # Sweep cluster counts over every file in data/
//!   fuzzy-regression --generate --process    # Both, in that order
//!   fuzzy-regression --process -c exp.toml   # Use an experiment config file
//!
//! Results rows start at the first cluster count that reaches the dataset's
//! number of describing columns; smaller counts fail with a singular system.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod error;
mod experiment;

use config::ExperimentConfig;
use error::Result;

const USAGE: &str = "\
No mode selected.
To generate test data pass --generate
To run FCM clustering and regression pass --process
Modes can be combined
Data files are read from the \"data\" directory relative to the working directory
(see --config to change directories, cluster range, fit metric and datasets)
Cluster counts below a dataset's number of describing columns give a singular
regression system; those counts are skipped with a warning and have no results row";

/// Generate synthetic linear datasets and evaluate fuzzy regression on them.
#[derive(Parser, Debug)]
#[command(name = "fuzzy-regression")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Generate the configured synthetic datasets
    #[arg(long)]
    generate: bool,

    /// Run the cluster-count sweep over every dataset file
    #[arg(long)]
    process: bool,

    /// Experiment configuration (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fixed seed for generation and clustering (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn execute(cli: &Cli) -> Result<()> {
    let mut config = ExperimentConfig::load(cli.config.as_deref())?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    if cli.generate {
        let written = experiment::generate_test_data(&config)?;
        info!(files = written.len(), dir = %config.data_dir.display(), "generated test data");
    }
    if cli.process {
        let results = experiment::process_data(&config)?;
        println!("Results written to {}", results.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.generate && !cli.process {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    init_tracing(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
