//! Command-line interface for fuzzphrase.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **match**: Run labeled fuzzy and regex patterns over a text file
//! - **score**: Score two phrases directly with a chosen ratio function
//! - **patterns**: List the predefined regex pattern keys
//!
//! ## Usage
//!
//! ```text
//! # Match patterns from a JSON file against a document
//! fuzzphrase match patterns.json document.txt
//!
//! # Pipe the document on stdin
//! cat document.txt | fuzzphrase match patterns.json -
//!
//! # JSON output for scripting
//! fuzzphrase match patterns.json document.txt --format json
//!
//! # Compare two phrases with the partial ratio
//! fuzzphrase score "grigori fuzphrase" "Grigori Fuzzphrase" --func partial
//!
//! # List predefined regex keys
//! fuzzphrase patterns
//! ```

use clap::{Parser, Subcommand};

pub mod matchcmd;
pub mod patterns;
pub mod score;

#[derive(Parser)]
#[command(name = "fuzzphrase")]
#[command(version)]
#[command(about = "Fuzzy phrase and regex matching over plain text")]
#[command(
    long_about = "fuzzphrase finds approximate matches of multi-token phrases in text.\n\nIt scores every plausible token window of a document against each registered query phrase, refines window boundaries, and reports ranked, non-redundant matches. Regex patterns (including a predefined registry of common entity shapes) run alongside the fuzzy patterns and report on the same 0-100 ratio scale."
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
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match labeled patterns from a file against a document
    Match(matchcmd::MatchArgs),

    /// Score two phrases with a ratio function
    Score(score::ScoreArgs),

    /// List predefined regex pattern keys
    Patterns,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
