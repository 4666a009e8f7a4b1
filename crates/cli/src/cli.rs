// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::matcher::Method;

/// A fast spam-comment triage tool for video channel owners
#[derive(Parser)]
#[command(name = "sift")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SIFT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan a batch of comments and report the flagged ones
    Scan(ScanArgs),
    /// Search one text for one pattern and print raw match positions
    Search(SearchArgs),
    /// Print shell completions to stdout
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// JSON file of comment records ("-" or omitted reads stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Matching method (overrides config)
    #[arg(short, long, value_enum)]
    pub method: Option<Method>,

    /// Spam pattern to search for (repeatable, overrides config)
    #[arg(short = 'p', long = "pattern", value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// File of spam patterns, one per line
    #[arg(long, value_name = "FILE")]
    pub patterns_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Maximum flagged comments to display (default: 15)
    #[arg(long, default_value_t = 15, value_name = "N")]
    pub limit: usize,

    /// Show all flagged comments (no limit)
    #[arg(long)]
    pub no_limit: bool,
}

#[derive(clap::Args)]
pub struct SearchArgs {
    /// Text to search in (used verbatim, no normalization)
    pub text: String,

    /// Pattern to search for (ignored by --method heuristic)
    pub pattern: Option<String>,

    /// Matching method
    #[arg(short, long, value_enum, default_value = "prefix-scan")]
    pub method: Method,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
