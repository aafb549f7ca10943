//! Behavioral specs for the playbooks checker.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::prelude::*;

#[test]
fn clean_playbook_passes() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("site.yml", CLEAN_PLAYBOOK)]);

    opsguard()
        .current_dir(dir.path())
        .args(["playbooks", "site.yml"])
        .assert()
        .success()
        .stdout(predicates::str::contains("All files look good."));
}

#[test]
fn warnings_alone_do_not_fail_the_run() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("site.yml", PIPE_PLAYBOOK)]);

    opsguard()
        .current_dir(dir.path())
        .args(["playbooks", "site.yml"])
        .assert()
        .success()
        .stdout(predicates::str::contains("WARNING (1):"))
        .stdout(predicates::str::contains("set -euo pipefail"));
}

#[test]
fn strict_mode_fails_on_warnings() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("site.yml", PIPE_PLAYBOOK)]);

    opsguard()
        .current_dir(dir.path())
        .args(["playbooks", "--strict", "site.yml"])
        .assert()
        .code(1);
}

#[test]
fn malformed_playbook_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("broken.yml", "- tasks: [unclosed\n")]);

    opsguard()
        .current_dir(dir.path())
        .args(["playbooks", "broken.yml"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("ERROR (1):"))
        .stdout(predicates::str::contains("Failed to parse YAML"));
}

#[test]
fn missing_file_is_diagnosed_and_skipped() {
    let dir = TempDir::new().unwrap();

    opsguard()
        .current_dir(dir.path())
        .args(["playbooks", "nope.yml"])
        .assert()
        .success()
        .stderr(predicates::str::contains("File not found: nope.yml"))
        .stdout(predicates::str::contains("Checked 0 file(s)"));
}

#[test]
fn remaining_paths_are_checked_after_a_missing_one() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("site.yml", PIPE_PLAYBOOK)]);

    opsguard()
        .current_dir(dir.path())
        .args(["playbooks", "nope.yml", "site.yml"])
        .assert()
        .stdout(predicates::str::contains("Checked 1 file(s)"))
        .stdout(predicates::str::contains("Total issues: 1"));
}

#[test]
fn summary_flag_hides_individual_issues() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("site.yml", PIPE_PLAYBOOK)]);

    opsguard()
        .current_dir(dir.path())
        .args(["playbooks", "--summary", "site.yml"])
        .assert()
        .stdout(predicates::str::contains("Total issues: 1"))
        .stdout(predicates::str::contains("Location:").not());
}

#[test]
fn nested_findings_carry_their_full_location() {
    let playbook = "\
- hosts: all
  tasks:
    - name: Guarded
      block:
        - ansible.builtin.ping: {}
";
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("site.yml", playbook)]);

    opsguard()
        .current_dir(dir.path())
        .args(["playbooks", "site.yml"])
        .assert()
        .stdout(predicates::str::contains("play[0].tasks[0].block[0]"));
}

#[test]
fn json_output_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("site.yml", PIPE_PLAYBOOK)]);

    let output = opsguard()
        .current_dir(dir.path())
        .args(["playbooks", "-o", "json", "site.yml"])
        .output()
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["scope"], "playbooks");
    assert_eq!(value["files_checked"], 1);
    assert_eq!(value["issues"][0]["severity"], "warning");
    assert_eq!(value["issues"][0]["path"], "site.yml");
}

#[test]
fn strict_json_includes_promoted_info_findings() {
    let playbook = "\
- hosts: all
  tasks:
    - name: Check service status
      ansible.builtin.command: systemctl status app
      register: out
";
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("site.yml", playbook)]);

    let lenient = opsguard()
        .current_dir(dir.path())
        .args(["playbooks", "-o", "json", "site.yml"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&lenient.stdout).unwrap();
    assert_eq!(value["issues"].as_array().unwrap().len(), 0);

    let strict = opsguard()
        .current_dir(dir.path())
        .args(["playbooks", "--strict", "-o", "json", "site.yml"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&strict.stdout).unwrap();
    assert_eq!(value["issues"].as_array().unwrap().len(), 1);
    assert_eq!(value["issues"][0]["severity"], "info");
}
