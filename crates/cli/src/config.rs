// SPDX-License-Identifier: MIT
// Copyright (c) 2026 m0sh1.cc

//! Configuration loading and the built-in pattern sets.
//!
//! Pattern lists that tune the checkers (secret keywords, allowed
//! directory sets, the required ownership label) live here as one
//! immutable value handed to the engines at construction. Defaults match
//! the compiled-in sets the guards have always shipped with.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Supported config schema version.
const CONFIG_VERSION: i64 = 1;

/// Config file name discovered at the checked root.
pub const CONFIG_FILE_NAME: &str = "opsguard.toml";

/// Top-level keys recognized in opsguard.toml.
const KNOWN_KEYS: &[&str] = &["version", "playbooks", "gitops"];

/// Parsed configuration for both checkers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playbooks: PlaybookConfig,
    pub gitops: GitopsConfig,
}

/// Tunables for the playbook idempotency checker.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybookConfig {
    /// Keywords that mark a task as secret-sensitive.
    pub secret_keywords: Vec<String>,

    /// Name fragments that mark a command task as a read-only check.
    pub check_name_keywords: Vec<String>,
}

impl Default for PlaybookConfig {
    fn default() -> Self {
        Self {
            secret_keywords: to_strings(&[
                "password",
                "token",
                "secret",
                "key",
                "credential",
                "api_key",
            ]),
            check_name_keywords: to_strings(&["check", "verify", "test", "get", "find"]),
        }
    }
}

/// Tunables for the GitOps repository checker.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitopsConfig {
    /// Allowed immediate children of the `apps/` root.
    pub apps_children: Vec<String>,

    /// Allowed immediate children of `cluster/environments/`.
    pub environments: Vec<String>,

    /// Ownership label every Application manifest must carry.
    pub ownership_label: String,

    /// Required value of the ownership label.
    pub ownership_value: String,
}

impl Default for GitopsConfig {
    fn default() -> Self {
        Self {
            apps_children: to_strings(&["cluster", "user", "argocd"]),
            environments: to_strings(&["lab"]),
            ownership_label: "app.kubernetes.io/part-of".to_string(),
            ownership_value: "apps-root".to_string(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Find opsguard.toml starting from `start_dir` and walking up to the git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value: toml::Value = toml::from_str(&text).map_err(|e| Error::Config {
        message: format!("invalid TOML: {}", e),
        path: Some(path.to_path_buf()),
    })?;

    let version = value.get("version").and_then(toml::Value::as_integer);
    match version {
        Some(CONFIG_VERSION) => {}
        Some(other) => {
            return Err(Error::Config {
                message: format!("unsupported config version: {}", other),
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

    if let Some(table) = value.as_table() {
        for key in table.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                tracing::warn!("unknown config key ignored: {}", key);
            }
        }
    }

    value.try_into().map_err(|e| Error::Config {
        message: format!("invalid config: {}", e),
        path: Some(path.to_path_buf()),
    })
}

/// Resolve configuration from an explicit path or by discovery.
///
/// An explicit path that does not exist is an error; absence of any
/// discovered file falls back to defaults.
pub fn resolve(explicit: Option<&Path>, start_dir: &Path) -> Result<Config> {
    match explicit {
        Some(path) => {
            if path.exists() {
                load(path)
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => match find_config(start_dir) {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                load(&path)
            }
            None => Ok(Config::default()),
        },
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
