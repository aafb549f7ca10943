//! Repository layout rules.
//!
//! Directory-level checks over the immediate children of the designated
//! roots. A missing root is not a finding; repositories adopt the layout
//! incrementally.

use std::path::Path;

use crate::config::GitopsConfig;
use crate::issue::Issue;

/// Children of `apps/` outside the allowed set are layout drift.
pub fn check_apps_layout(repo: &Path, config: &GitopsConfig) -> Vec<Issue> {
    unexpected_children(
        &repo.join("apps"),
        &config.apps_children,
        "Unexpected apps/ child directory",
    )
}

/// Children of `cluster/environments/` outside the allowed set are
/// unsanctioned overlays.
pub fn check_env_overlays(repo: &Path, config: &GitopsConfig) -> Vec<Issue> {
    unexpected_children(
        &repo.join("cluster").join("environments"),
        &config.environments,
        "Unexpected environment overlay",
    )
}

fn unexpected_children(root: &Path, allowed: &[String], message: &str) -> Vec<Issue> {
    let Ok(entries) = std::fs::read_dir(root) else {
        return Vec::new();
    };

    let mut issues = Vec::new();
    let mut children: Vec<_> = entries.flatten().collect();
    children.sort_by_key(|e| e.file_name());

    for child in children {
        if !child.file_type().is_ok_and(|t| t.is_dir()) {
            continue;
        }
        let name = child.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !allowed.iter().any(|a| a == name) {
            issues.push(
                Issue::error(format!("{}: {}", message, name))
                    .in_path(child.path().display().to_string()),
            );
        }
    }
    issues
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
