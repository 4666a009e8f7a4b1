//! Behavioral specs for `sift search`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

const SPAM_COMMENT: &str =
    "awesome bro plz make project based js videos for beginners thanks bro88";

/// Overlapping occurrences print one position per line.
#[test]
fn search_prints_positions() {
    sift_cmd()
        .args(["search", "aaaa", "aa"])
        .assert()
        .success()
        .stdout("0\n1\n2\n");
}

/// All three exact methods report the same positions.
#[test]
fn search_methods_agree() {
    for method in ["prefix-scan", "skip-scan", "rolling-hash"] {
        sift_cmd()
            .args(["search", SPAM_COMMENT, "thanks", "--method", method])
            .assert()
            .success()
            .stdout("59\n");
    }
}

/// No match prints nothing and still exits 0.
#[test]
fn search_no_match_prints_nothing() {
    sift_cmd()
        .args(["search", "hello", "xyz"])
        .assert()
        .success()
        .stdout("");
}

/// A pattern longer than the text is a clean no-match.
#[test]
fn search_pattern_longer_than_text() {
    sift_cmd()
        .args(["search", "ab", "abcd"])
        .assert()
        .success()
        .stdout("");
}

/// The heuristic prints matched tokens instead of positions.
#[test]
fn search_heuristic_prints_tokens() {
    sift_cmd()
        .args(["search", SPAM_COMMENT, "--method", "heuristic"])
        .assert()
        .success()
        .stdout("bro88\n");
}

/// Unknown methods are rejected, never treated as "no match".
#[test]
fn search_unknown_method_is_rejected() {
    sift_cmd()
        .args(["search", "text", "pattern", "--method", "bogus"])
        .assert()
        .code(2);
}

/// Exact methods need a pattern argument.
#[test]
fn search_missing_pattern_is_an_argument_error() {
    sift_cmd()
        .args(["search", "text", "--method", "skip-scan"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("requires a pattern"));
}

/// Empty patterns are rejected uniformly by the exact matchers.
#[test]
fn search_empty_pattern_is_rejected() {
    for method in ["prefix-scan", "skip-scan", "rolling-hash"] {
        sift_cmd()
            .args(["search", "abc", "", "--method", method])
            .assert()
            .code(2)
            .stderr(predicates::str::contains("empty pattern"));
    }
}
