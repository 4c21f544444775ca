//! # CLI Argument Definitions
//!
//! Command-line flags for the `registrar` binary. Every flag overrides the matching value
//! from the configuration file and environment.

use clap::Parser;
use registrar::domain::config::{RegistrarConfig, SeedConfig};
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "registrar")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive course registration manager")]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML); defaults to an optional `registrar.toml`
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum log level (error, warn, info, debug, trace, off)
    #[arg(short, long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Also write rolling log files into this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Start with an empty registry, ignoring configured seed data
    #[arg(long)]
    pub no_seed: bool,
}

impl Cli {
    /// Folds the command-line overrides into a loaded configuration.
    pub fn apply(&self, config: &mut RegistrarConfig) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(dir) = &self.log_dir {
            config.logging.directory = Some(dir.clone());
        }
        if self.no_seed {
            config.seed = SeedConfig::default();
        }
    }
}
