//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a Command configured to run the sift binary
pub fn sift_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("sift"))
}

/// Comment batch used across scan specs: one clean comment, one matching
/// the word-then-digits shape, one carrying a pattern word.
pub const SAMPLE_COMMENTS: &str = r#"[
  {"id": "c1", "author": "@viewer", "text": "great breakdown, subscribed"},
  {"id": "c2", "author": "@bot", "text": "awesome bro plz make project based js videos for beginners thanks bro88"},
  {"id": "c3", "author": "@caps", "text": "Daftar  JUDI   slot sekarang"}
]"#;

/// Write a comments JSON file into a fresh temp dir.
pub fn temp_comments(json: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("comments.json");
    std::fs::write(&path, json).unwrap();
    (dir, path)
}

/// Write a sift.toml and a comments file into the same temp dir, for specs
/// that exercise config discovery via the working directory.
pub fn temp_project(config: &str, comments: &str) -> (TempDir, PathBuf) {
    let (dir, path) = temp_comments(comments);
    std::fs::write(dir.path().join("sift.toml"), config).unwrap();
    (dir, path)
}
