//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::config::{Config, PlaybookConfig};
use crate::issue::Issue;
use crate::playbook::PlaybookChecker;

/// Creates an empty temp directory acting as a repository root.
pub fn temp_repo() -> TempDir {
    TempDir::new().unwrap()
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically. A trailing `/` marks a
/// bare directory.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if path.ends_with('/') {
            fs::create_dir_all(&full_path).unwrap();
            continue;
        }
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Check playbook text with default config, non-strict.
pub fn check_playbook(text: &str) -> Vec<Issue> {
    PlaybookChecker::new(&PlaybookConfig::default(), false)
        .unwrap()
        .check_text(text)
}

/// Check playbook text with default config, strict.
pub fn check_playbook_strict(text: &str) -> Vec<Issue> {
    PlaybookChecker::new(&PlaybookConfig::default(), true)
        .unwrap()
        .check_text(text)
}

/// Default config value for checker construction in tests.
pub fn default_config() -> Config {
    Config::default()
}
