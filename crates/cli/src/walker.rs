// SPDX-License-Identifier: MIT
// Copyright (c) 2026 m0sh1.cc

//! YAML file discovery for repository-level checks.
//!
//! Uses the `ignore` crate's walker with its standard filters disabled:
//! the guards scan tracked and untracked files alike, and prune only a
//! fixed set of tooling directories. Skipping happens during traversal,
//! not after discovery, so pruned subtrees cost no I/O.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Directories to skip entirely during walking.
pub const SKIP_DIRECTORIES: &[&str] = &[".git", ".venv", ".terraform", "node_modules", ".cache"];

/// Discover YAML files under `root`, sorted for deterministic reports.
pub fn yaml_files(root: &Path) -> Vec<PathBuf> {
    let prune_root = root.to_path_buf();
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.filter_entry(move |entry| !is_pruned(entry.path(), &prune_root));

    let mut files = Vec::new();
    for entry in builder.build() {
        let Ok(entry) = entry else {
            // Unreadable entries are skipped, not fatal
            continue;
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if has_yaml_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    files
}

fn has_yaml_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}

/// Whether an entry (and with it, its subtree) is excluded from scanning.
fn is_pruned(path: &Path, root: &Path) -> bool {
    if path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| SKIP_DIRECTORIES.contains(&n))
    {
        return true;
    }

    let Ok(rel) = path.strip_prefix(root) else {
        return false;
    };
    let parts: Vec<&str> = rel
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();

    // Archived docs and cluster bootstrap manifests are exempt from checks
    if parts.contains(&"docs") && parts.contains(&"archive") {
        return true;
    }
    parts.windows(2).any(|w| w == ["cluster", "bootstrap"])
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
