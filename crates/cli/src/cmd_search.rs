// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `sift search` implementation: raw matcher diagnostics.
//!
//! Prints one match position per line (or, for the heuristic, one matched
//! token per line). The text is searched verbatim - normalization belongs
//! to `scan`.

use sift::cli::SearchArgs;
use sift::error::{Error, ExitCode};
use sift::matcher::{Method, heuristic, prefix_scan, rolling_hash, skip_scan};

pub fn run(args: &SearchArgs) -> anyhow::Result<ExitCode> {
    let search = match args.method {
        Method::Heuristic => {
            for token in heuristic::search(&args.text) {
                println!("{token}");
            }
            return Ok(ExitCode::Success);
        }
        Method::PrefixScan => prefix_scan::search,
        Method::SkipScan => skip_scan::search,
        Method::RollingHash => rolling_hash::search,
    };

    let Some(pattern) = args.pattern.as_deref() else {
        return Err(Error::Argument(format!("method {} requires a pattern", args.method)).into());
    };

    let positions = search(&args.text, pattern).map_err(Error::from)?;
    for position in positions {
        println!("{position}");
    }

    Ok(ExitCode::Success)
}
