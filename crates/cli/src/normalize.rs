// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comment and pattern normalization.
//!
//! Matching is case- and whitespace-sensitive, so both sides must pass
//! through the same rules before they meet: lower-case everything, then
//! collapse whitespace runs in comment text and strip whitespace from
//! patterns entirely.

/// Lower-case a comment body and collapse whitespace runs to single spaces.
/// Leading and trailing whitespace is dropped.
pub fn comment(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lower-case a search pattern and strip all whitespace.
pub fn pattern(pattern: &str) -> String {
    pattern
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
