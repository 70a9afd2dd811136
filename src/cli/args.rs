//! Command line argument parsing for the Kazoe CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Kazoe - derived token-count fields and mapping merges
#[derive(Parser, Debug, Clone)]
#[command(name = "kazoe")]
#[command(about = "Count analyzed token positions and merge token-count mappings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KazoeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug, 4=trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Mapping configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "KAZOE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KazoeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Count the token positions of a text
    Count(CountArgs),

    /// Apply mapping definitions in order and show every generation
    Merge(MergeArgs),

    /// Compute derived fields for JSONL documents
    Parse(ParseArgs),
}

/// Arguments for counting positions
#[derive(Parser, Debug, Clone)]
pub struct CountArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Analyzer name
    #[arg(short, long, default_value = "standard")]
    pub analyzer: String,

    /// Field name passed to the analyzer
    #[arg(long, default_value = "field")]
    pub field: String,

    /// Count tokens instead of summing position increments
    #[arg(long)]
    pub without_increments: bool,
}

/// Arguments for merging mappings
#[derive(Parser, Debug, Clone)]
pub struct MergeArgs {
    /// Initial mapping definition (JSON)
    #[arg(value_name = "MAPPING_FILE")]
    pub mapping_file: PathBuf,

    /// Mapping updates, applied in order (JSON)
    #[arg(value_name = "UPDATE_FILE")]
    pub update_files: Vec<PathBuf>,
}

/// Arguments for parsing documents
#[derive(Parser, Debug, Clone)]
pub struct ParseArgs {
    /// Mapping definition (JSON)
    #[arg(short, long, value_name = "MAPPING_FILE")]
    pub mapping: PathBuf,

    /// Documents, one JSON object per line
    #[arg(value_name = "DOCUMENT_FILE")]
    pub document_file: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
