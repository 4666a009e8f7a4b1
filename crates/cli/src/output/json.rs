// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed). Unlike the text
//! formatter the JSON report always carries every flagged record; display
//! limits are a terminal concern.

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use crate::matcher::Method;
use crate::record::CommentRecord;
use crate::triage::ScanOutcome;

/// Scan report serialized for machine consumers.
#[derive(Debug, Serialize)]
pub struct ScanReport<'a> {
    /// ISO 8601 timestamp.
    pub timestamp: String,
    pub method: Method,
    pub scanned: usize,
    pub flagged_count: usize,
    pub flagged: &'a [CommentRecord],
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON report.
    pub fn write(&mut self, report: &ScanReport) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

/// Build a report with the current timestamp.
pub fn create_report(outcome: &ScanOutcome) -> ScanReport<'_> {
    ScanReport {
        timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        method: outcome.method,
        scanned: outcome.scanned,
        flagged_count: outcome.flagged.len(),
        flagged: &outcome.flagged,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
