//! Command-line interface for shift-scorer.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **solve**: Score every test case in a multi-case input
//! - **score**: Score a single case given on the command line, with a breakdown
//!
//! ## Usage
//!
//! ```text
//! # Score all cases in a file, one integer per line
//! shift-scorer solve cases.txt
//!
//! # Read from stdin
//! cat cases.txt | shift-scorer solve -
//!
//! # Per-case breakdown as JSON
//! shift-scorer solve cases.txt.gz --format json
//!
//! # A single case: reference "abcde" with position 3 known to be 'c'
//! shift-scorer score --reference abcde --set 3:c
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::scoring::{ScoringConfig, SegmentationMode};

pub mod score;
pub mod solve;

#[derive(Parser)]
#[command(name = "shift-scorer")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Maximize agreement between a partially known sequence and a reference")]
#[command(
    long_about = "shift-scorer computes, for each test case, the largest number of positions at which a partially known target sequence can agree with a reference of the same length.\n\nUnknown runs in the target may be filled with a shifted copy of the reference, where the shift is bounded by the length of the run."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// How runs of unknown positions are grouped into free blocks
    #[arg(long, global = true, value_enum, default_value_t = SegmentationMode::Merged)]
    pub segmentation: SegmentationMode,
}

impl Cli {
    #[must_use]
    pub fn scoring_config(&self) -> ScoringConfig {
        ScoringConfig::default().with_segmentation(self.segmentation)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every test case in an input file or stdin
    Solve(SolveArgs),

    /// Score a single test case given on the command line
    Score(score::ScoreArgs),
}

#[derive(clap::Args)]
pub struct SolveArgs {
    /// Input file (`-` for stdin, `.gz` files are decompressed)
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
