// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Batch triage over comment records.
//!
//! Verdicts are independent per comment, so the batch fans out across the
//! rayon pool, one task per record. Flagged records come back in their
//! original order with identifiers and raw text untouched; only the
//! matching itself runs against the normalized form.

use rayon::prelude::*;

use crate::matcher::{self, Method};
use crate::normalize;
use crate::record::CommentRecord;

/// Result of scanning one comment batch.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Method every verdict in this batch used.
    pub method: Method,
    /// How many records were scanned.
    pub scanned: usize,
    /// Flagged records, in original batch order.
    pub flagged: Vec<CommentRecord>,
}

/// Flag every record whose normalized text matches under `method`.
///
/// Patterns are normalized once per batch; patterns that normalize to
/// empty are dropped here so the engine never sees them.
pub fn scan(records: Vec<CommentRecord>, method: Method, patterns: &[String]) -> ScanOutcome {
    let patterns: Vec<String> = patterns
        .iter()
        .map(|p| normalize::pattern(p))
        .filter(|p| !p.is_empty())
        .collect();

    tracing::debug!(
        %method,
        patterns = patterns.len(),
        records = records.len(),
        "scanning comment batch"
    );

    let scanned = records.len();
    let verdicts: Vec<bool> = records
        .par_iter()
        .map(|record| matcher::is_flagged(&normalize::comment(&record.text), method, &patterns))
        .collect();

    let flagged = records
        .into_iter()
        .zip(verdicts)
        .filter_map(|(record, hit)| hit.then_some(record))
        .collect();

    ScanOutcome {
        method,
        scanned,
        flagged,
    }
}

#[cfg(test)]
#[path = "triage_tests.rs"]
mod tests;
