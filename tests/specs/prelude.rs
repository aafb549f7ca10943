//! Test helpers for behavioral specifications.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

pub use assert_cmd::Command;
pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// A command for the opsguard binary under test.
pub fn opsguard() -> Command {
    Command::cargo_bin("opsguard").unwrap()
}

/// Creates a directory tree from (path, content) pairs. A trailing `/`
/// marks a bare directory.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
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

/// A playbook that produces no findings.
pub const CLEAN_PLAYBOOK: &str = "\
- hosts: all
  tasks:
    - name: Install curl
      ansible.builtin.package:
        name: curl
        state: present
";

/// A playbook with exactly one warning (shell pipeline without pipefail).
pub const PIPE_PLAYBOOK: &str = "\
- hosts: all
  tasks:
    - name: List processes
      ansible.builtin.shell: ps aux | grep app
      changed_when: false
";
