// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles sift.toml parsing with version validation. The config only
//! carries scan defaults; command-line flags win over it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::matcher::Method;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Scan defaults.
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Defaults for `sift scan`.
#[derive(Debug, Default, Deserialize)]
pub struct ScanConfig {
    /// Default matching method, as a kebab-case name.
    pub method: Option<String>,

    /// Default spam patterns.
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl Config {
    /// Resolve the configured method, if any. An unknown name is an
    /// explicit error here, never a silent "no match".
    pub fn method(&self) -> Result<Option<Method>> {
        self.scan.method.as_deref().map(str::parse).transpose()
    }
}

/// Parse config content with version validation.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // Version first, so a missing or unsupported version beats field errors.
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: format!("invalid TOML: {e}"),
        path: Some(path.to_path_buf()),
    })?;

    match version_check.version {
        Some(1) => {}
        Some(v) => {
            return Err(Error::Config {
                message: format!("unsupported config version {v} (expected 1)"),
                path: Some(path.to_path_buf()),
            });
        }
        None => {
            return Err(Error::Config {
                message: "missing required field: version".to_string(),
                path: Some(path.to_path_buf()),
            });
        }
    }

    toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })
}

/// Load config from a file.
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content, path)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load `sift.toml` from `dir` if present, built-in defaults otherwise.
pub fn discover(dir: &Path) -> Result<Config> {
    let candidate = default_path(dir);
    if candidate.is_file() {
        load(&candidate)
    } else {
        Ok(Config::default())
    }
}

/// Path config discovery looks at within `dir`.
pub fn default_path(dir: &Path) -> PathBuf {
    dir.join("sift.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
