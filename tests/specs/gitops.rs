//! Behavioral specs for the gitops checker.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::prelude::*;

const SEALED_SECRET: &str = "kind: SealedSecret\nmetadata:\n  name: db\n";

fn repo_with(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), files);
    dir
}

#[test]
fn clean_repo_passes() {
    let dir = repo_with(&[
        ("apps/cluster/web/deploy.yaml", "kind: Deployment\n"),
        ("apps/cluster/db/sealed.yaml", SEALED_SECRET),
        ("cluster/environments/lab/kustomization.yaml", "resources: []\n"),
    ]);

    opsguard()
        .args(["gitops", "--repo"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("All files look good."));
}

#[test]
fn plain_secret_fails_the_run() {
    let dir = repo_with(&[("apps/cluster/db/secret.yaml", "kind: Secret\n")]);

    opsguard()
        .args(["gitops", "--repo"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains(
            "Plain Secret found; use SealedSecrets",
        ));
}

#[test]
fn skip_reconcile_warns_without_failing() {
    let dir = repo_with(&[(
        "apps/cluster/app/kustomization.yaml",
        "metadata:\n  annotations:\n    argocd.argoproj.io/skip-reconcile: \"true\"\n",
    )]);

    opsguard()
        .args(["gitops", "--repo"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("skip-reconcile"));
}

#[test]
fn strict_mode_fails_on_warnings() {
    let dir = repo_with(&[(
        "apps/cluster/app/kustomization.yaml",
        "metadata:\n  annotations:\n    argocd.argoproj.io/skip-reconcile: \"true\"\n",
    )]);

    opsguard()
        .args(["gitops", "--strict", "--repo"])
        .arg(dir.path())
        .assert()
        .code(1);
}

#[test]
fn misplaced_application_fails_the_run() {
    let manifest = "\
kind: Application
metadata:
  name: demo
  labels:
    app.kubernetes.io/part-of: apps-root
";
    let dir = repo_with(&[("cluster/apps/demo.yaml", manifest)]);

    opsguard()
        .args(["gitops", "--repo"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains(
            "outside apps/argocd/{applications,disabled}",
        ));
}

#[test]
fn unexpected_environment_overlay_fails_the_run() {
    let dir = repo_with(&[("cluster/environments/prod/", "")]);

    opsguard()
        .args(["gitops", "--repo"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains(
            "Unexpected environment overlay: prod",
        ));
}

#[test]
fn missing_repo_is_a_usage_error() {
    opsguard()
        .args(["gitops", "--repo", "/nonexistent/infra"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("does not exist"));
}

#[test]
fn json_output_carries_scope_and_issues() {
    let dir = repo_with(&[("apps/cluster/db/secret.yaml", "kind: Secret\n")]);

    let output = opsguard()
        .args(["gitops", "-o", "json", "--repo"])
        .arg(dir.path())
        .output()
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["files_checked"], 1);
    assert_eq!(value["issues"][0]["severity"], "error");
    assert!(
        value["issues"][0]["path"]
            .as_str()
            .unwrap()
            .ends_with("secret.yaml")
    );
}

#[test]
fn bootstrap_manifests_are_exempt() {
    let dir = repo_with(&[("cluster/bootstrap/secret.yaml", "kind: Secret\n")]);

    opsguard()
        .args(["gitops", "--repo"])
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn invalid_config_is_a_usage_error() {
    let dir = repo_with(&[
        ("opsguard.toml", "version = 99\n"),
        ("apps/cluster/app.yaml", "kind: Deployment\n"),
    ]);

    opsguard()
        .args(["gitops", "--repo"])
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version"));
}

#[test]
fn configured_layout_extends_the_allowed_set() {
    let dir = repo_with(&[
        ("opsguard.toml", "version = 1\n\n[gitops]\nenvironments = [\"lab\", \"staging\"]\n"),
        ("cluster/environments/staging/", ""),
    ]);

    opsguard()
        .args(["gitops", "--repo"])
        .arg(dir.path())
        .assert()
        .success();
}
