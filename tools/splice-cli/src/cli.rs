//! CLI command definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "splice")]
#[command(about = "Inspect .splice drum machine patterns")]
#[command(version)]
pub struct Cli {
    /// Log decoder progress at debug level (ignored when RUST_LOG is set)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode pattern files and print them
    Show {
        /// Paths to .splice files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print JSON instead of the step grid
        #[arg(long)]
        json: bool,
    },

    /// Decode pattern files and report which ones are valid
    Check {
        /// Paths to .splice files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}
