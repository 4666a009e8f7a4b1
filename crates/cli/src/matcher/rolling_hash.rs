// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rolling-hash substring search with mandatory verification.
//!
//! A polynomial hash over a sliding window pre-filters candidate positions
//! in O(1) per shift. The modulus is deliberately tiny, so hash equality is
//! common and means nothing on its own: every candidate is verified byte by
//! byte before it is reported.

use super::MatchError;

const BASE: u64 = 256;
const MODULUS: u64 = 101;

/// Find every start offset of `pattern` in `text`, overlaps included.
///
/// Offsets are byte positions, ascending. The result is identical to the
/// other exact matchers; hashing only changes how fast candidates are
/// discarded, never what is reported.
pub fn search(text: &str, pattern: &str) -> Result<Vec<usize>, MatchError> {
    let text = text.as_bytes();
    let pattern = pattern.as_bytes();
    if pattern.is_empty() {
        return Err(MatchError::EmptyPattern);
    }

    let mut hits = Vec::new();
    if pattern.len() > text.len() {
        return Ok(hits);
    }

    let m = pattern.len();
    let pattern_hash = hash_of(pattern);
    let mut window_hash = hash_of(&text[..m]);

    // Weight of the window's leading byte: BASE^(m-1) mod MODULUS.
    let mut lead_weight = 1u64;
    for _ in 0..m - 1 {
        lead_weight = (lead_weight * BASE) % MODULUS;
    }

    for i in 0..=text.len() - m {
        if window_hash == pattern_hash && &text[i..i + m] == pattern {
            hits.push(i);
        }
        if i + m < text.len() {
            window_hash = roll(window_hash, text[i], text[i + m], lead_weight);
        }
    }

    Ok(hits)
}

/// Polynomial hash of a byte slice, mod MODULUS.
fn hash_of(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0, |hash, &byte| (hash * BASE + u64::from(byte)) % MODULUS)
}

/// Slide the window one byte: drop `outgoing`, append `incoming`.
fn roll(hash: u64, outgoing: u8, incoming: u8, lead_weight: u64) -> u64 {
    // Add MODULUS before subtracting so the intermediate value stays
    // non-negative under the modulus.
    let stripped = (hash + MODULUS - (u64::from(outgoing) * lead_weight) % MODULUS) % MODULUS;
    (stripped * BASE + u64::from(incoming)) % MODULUS
}

#[cfg(test)]
#[path = "rolling_hash_tests.rs"]
mod tests;
