use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "unshard")]
#[command(about = "Recover secrets from base-encoded threshold share records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconstruct the secret from each share record file
    Recover {
        /// Share record files (JSON), processed independently
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Screen shares for statistical outliers before recovering
        #[arg(long)]
        screen: bool,

        /// Use f64 statistics for the screen instead of the integer heuristic
        #[arg(long, requires = "screen")]
        float_stats: bool,
    },
    /// Only screen share record files for anomalous shares
    Screen {
        /// Share record files (JSON), processed independently
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Use f64 statistics instead of the integer heuristic
        #[arg(long)]
        float_stats: bool,
    },
}
