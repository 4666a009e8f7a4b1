//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::record::CommentRecord;

/// Reference scanner: every start offset of `pattern` in `text`, found by
/// direct comparison at each window. The matchers are tested against this,
/// never against each other.
pub fn brute_force(text: &str, pattern: &str) -> Vec<usize> {
    let text = text.as_bytes();
    let pattern = pattern.as_bytes();
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| &text[i..i + pattern.len()] == pattern)
        .collect()
}

/// A comment record with a derived author label.
pub fn record(id: &str, text: &str) -> CommentRecord {
    CommentRecord {
        id: id.to_string(),
        author: format!("@{id}"),
        text: text.to_string(),
    }
}
