// SPDX-License-Identifier: MIT
// Copyright (c) 2026 m0sh1.cc

//! GitOps repository checker.
//!
//! Flat documents, no task recursion: layout rules over the designated
//! roots, then per-file manifest rules over every discovered YAML file.
//! One file is fully processed before the next begins; a per-file read
//! failure degrades to an issue and the run continues.

pub mod layout;
pub mod manifest;

use std::path::Path;

use crate::config::GitopsConfig;
use crate::error::Result;
use crate::issue::{Issue, RunReport};
use crate::walker;

use manifest::ManifestPatterns;

/// The GitOps checker: compiled patterns plus the immutable layout config.
pub struct GitopsChecker {
    patterns: ManifestPatterns,
    config: GitopsConfig,
}

impl GitopsChecker {
    pub fn new(config: &GitopsConfig) -> Result<Self> {
        Ok(Self {
            patterns: ManifestPatterns::new(config)?,
            config: config.clone(),
        })
    }

    /// Check a whole repository, returning the aggregated report.
    pub fn run(&self, repo: &Path) -> RunReport {
        let mut report = RunReport::new(repo.display().to_string());

        report.record(layout::check_apps_layout(repo, &self.config));
        report.record(layout::check_env_overlays(repo, &self.config));

        for path in walker::yaml_files(repo) {
            let text = match std::fs::read(&path) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(err) => {
                    report.record_file(
                        &path,
                        vec![Issue::error(format!("Failed to read file: {}", err))],
                    );
                    continue;
                }
            };

            // Blank files are counted but have nothing to check
            if text.trim().is_empty() {
                report.record_file(&path, Vec::new());
                continue;
            }

            let issues = manifest::check_manifest(&path, repo, &text, &self.patterns, &self.config);
            report.record_file(&path, issues);
        }

        report
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
