// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! One line per flagged comment, then a summary:
//! ```text
//!   <id> <author>: <comment text>
//! 2 of 120 comments flagged (rolling-hash)
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::FormatOptions;
use crate::color::scheme;
use crate::record::CommentRecord;
use crate::triage::ScanOutcome;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    writer: W,
    options: FormatOptions,
    shown: usize,
    truncated: bool,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout with the given color choice.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            shown: 0,
            truncated: false,
        }
    }

    /// Write flagged records, a summary line, and a truncation note when
    /// the limit cut the listing short.
    pub fn write_report(&mut self, outcome: &ScanOutcome) -> std::io::Result<()> {
        for record in &outcome.flagged {
            if let Some(limit) = self.options.limit
                && self.shown >= limit
            {
                self.truncated = true;
                break;
            }
            self.write_record(record)?;
            self.shown += 1;
        }

        self.write_summary(outcome)?;

        if self.truncated
            && let Some(limit) = self.options.limit
        {
            writeln!(
                self.writer,
                "Stopped after {} flagged comments. Use --no-limit to see all.",
                limit
            )?;
        }

        Ok(())
    }

    fn write_record(&mut self, record: &CommentRecord) -> std::io::Result<()> {
        write!(self.writer, "  ")?;

        self.writer.set_color(&scheme::comment_id())?;
        write!(self.writer, "{}", record.id)?;
        self.writer.reset()?;

        write!(self.writer, " ")?;
        self.writer.set_color(&scheme::author())?;
        write!(self.writer, "{}", record.author)?;
        self.writer.reset()?;

        // Comment bodies may span lines; keep the listing one line per record.
        writeln!(self.writer, ": {}", flatten(&record.text))
    }

    fn write_summary(&mut self, outcome: &ScanOutcome) -> std::io::Result<()> {
        let count = outcome.flagged.len();
        let spec = if count > 0 {
            scheme::flagged()
        } else {
            scheme::clean()
        };

        self.writer.set_color(&spec)?;
        write!(self.writer, "{}", count)?;
        self.writer.reset()?;

        writeln!(
            self.writer,
            " of {} comment{} flagged ({})",
            outcome.scanned,
            if outcome.scanned == 1 { "" } else { "s" },
            outcome.method
        )
    }

    /// Check if output was truncated.
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    /// Consume the formatter and hand back its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Collapse a comment body onto one display line.
fn flatten(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
