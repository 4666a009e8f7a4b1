// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural heuristic for gambling-ad tokens.
//!
//! Spam comments of this family advertise sites named like "gacor77" or
//! "maxwin888" - a run of letters immediately followed by two or three
//! digits, standing alone as a token. The shape is fixed; callers select it
//! by method, they do not configure it.

use std::sync::LazyLock;

use regex::Regex;

/// A word of letters immediately followed by 2-3 digits, bounded on both
/// sides. "bro88" matches; "bro8" and "bro8888" do not, and neither half of
/// "thanks88bro99" does - digit-to-letter is not a boundary.
#[allow(clippy::expect_used)]
static TOKEN_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]+\d{2,3}\b").expect("valid regex"));

/// Collect every token matching the spam shape, in order of appearance.
///
/// Returns the matched substrings themselves; the caller-supplied pattern
/// collection plays no part here.
pub fn search(text: &str) -> Vec<&str> {
    TOKEN_SHAPE.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
#[path = "heuristic_tests.rs"]
mod tests;
