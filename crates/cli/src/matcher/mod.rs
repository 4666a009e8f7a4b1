// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spam-pattern matching engine.
//!
//! Four matchers behind one contract: `search(text, pattern)` returns every
//! start offset of `pattern` in `text`, ascending, discovered left to right.
//! The structural heuristic is the odd one out - it carries its own fixed
//! pattern and returns matched tokens instead of offsets.
//!
//! Everything here is pure and synchronous. Working tables are rebuilt per
//! call; nothing is shared between invocations, so callers may fan out one
//! task per comment without coordination.

pub mod heuristic;
pub mod prefix_scan;
pub mod rolling_hash;
pub mod skip_scan;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Error produced by the exact matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// Exact matchers refuse empty patterns rather than invent a meaning
    /// for them. The same rule holds across all three.
    #[error("empty pattern")]
    EmptyPattern,
}

/// Matching method selected per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Failure-table scan (prefix function).
    PrefixScan,
    /// Backward scan with a last-occurrence table.
    SkipScan,
    /// Rolling polynomial hash with verification.
    RollingHash,
    /// Fixed word-then-digits shape; ignores caller patterns.
    Heuristic,
}

impl Method {
    /// Canonical kebab-case name, matching the CLI and config spelling.
    pub fn name(self) -> &'static str {
        match self {
            Method::PrefixScan => "prefix-scan",
            Method::SkipScan => "skip-scan",
            Method::RollingHash => "rolling-hash",
            Method::Heuristic => "heuristic",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "prefix-scan" => Ok(Method::PrefixScan),
            "skip-scan" => Ok(Method::SkipScan),
            "rolling-hash" => Ok(Method::RollingHash),
            "heuristic" => Ok(Method::Heuristic),
            _ => Err(Error::UnsupportedMethod {
                name: s.to_string(),
            }),
        }
    }
}

/// Decide whether one normalized comment text is spam under one method.
///
/// For the heuristic the pattern collection is ignored. For the exact
/// methods the verdict is the OR over patterns of "occurs anywhere in the
/// text". An empty collection means there is nothing to search for, so the
/// verdict is `false` - that is a caller state, not an error. A pattern the
/// matchers reject (empty after normalization) contributes no match for the
/// same reason; matcher errors never escape this function.
pub fn is_flagged(text: &str, method: Method, patterns: &[String]) -> bool {
    let search: fn(&str, &str) -> Result<Vec<usize>, MatchError> = match method {
        Method::Heuristic => return !heuristic::search(text).is_empty(),
        Method::PrefixScan => prefix_scan::search,
        Method::SkipScan => skip_scan::search,
        Method::RollingHash => rolling_hash::search,
    };

    patterns
        .iter()
        .any(|pattern| search(text, pattern).is_ok_and(|hits| !hits.is_empty()))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
