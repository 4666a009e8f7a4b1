// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `sift scan` implementation.
//!
//! Resolution order for method and patterns: command-line flags, then the
//! config file, then built-in defaults (prefix-scan, no patterns).

use std::fs;
use std::path::Path;

use sift::cli::{Cli, OutputFormat, ScanArgs};
use sift::color;
use sift::config;
use sift::error::{Error, ExitCode, Result};
use sift::matcher::Method;
use sift::output::FormatOptions;
use sift::output::json::{JsonFormatter, create_report};
use sift::output::text::TextFormatter;
use sift::record;
use sift::triage;

pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => config::load(path)?,
        None => config::discover(Path::new("."))?,
    };

    let method = match args.method {
        Some(method) => method,
        None => config.method()?.unwrap_or(Method::PrefixScan),
    };

    let patterns = resolve_patterns(args, &config)?;

    let records = match &args.input {
        Some(path) if path.as_os_str() != "-" => record::read_file(path)?,
        _ => record::read_stdin()?,
    };

    let outcome = triage::scan(records, method, &patterns);

    let options = if args.no_limit {
        FormatOptions::no_limit()
    } else {
        FormatOptions::with_limit(args.limit)
    };

    match args.output {
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(std::io::stdout());
            formatter.write(&create_report(&outcome))?;
        }
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(color::resolve_color(), options);
            formatter.write_report(&outcome)?;
        }
    }

    if outcome.flagged.is_empty() {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::Flagged)
    }
}

/// Flags win over config; a patterns file extends the flags.
fn resolve_patterns(args: &ScanArgs, config: &config::Config) -> Result<Vec<String>> {
    let mut patterns = args.patterns.clone();

    if let Some(path) = &args.patterns_file {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        patterns.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );
    }

    if patterns.is_empty() {
        patterns.clone_from(&config.scan.patterns);
    }

    Ok(patterns)
}
