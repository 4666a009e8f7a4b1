// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comment records exported from the platform client.
//!
//! The fetch side of the pipeline dumps comments as a JSON array of
//! `{id, author, text}` objects; this module reads that shape from a file
//! or stdin. Only `text` feeds the matching engine - `id` and `author`
//! ride along so the owner can act on flagged results.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One fetched comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Opaque platform identifier, echoed back untouched.
    pub id: String,
    /// Display label of the comment author.
    pub author: String,
    /// Raw comment body as fetched; normalization happens at scan time.
    pub text: String,
}

/// Read a JSON array of comment records from a file.
pub fn read_file(path: &Path) -> Result<Vec<CommentRecord>> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&raw, path)
}

/// Read a JSON array of comment records from stdin.
pub fn read_stdin() -> Result<Vec<CommentRecord>> {
    let path = PathBuf::from("<stdin>");
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
    parse(&raw, &path)
}

fn parse(raw: &str, path: &Path) -> Result<Vec<CommentRecord>> {
    serde_json::from_str(raw).map_err(|e| Error::Input {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
