// SPDX-License-Identifier: MIT
// Copyright (c) 2026 m0sh1.cc

//! Per-file GitOps manifest rules.
//!
//! Rules run over the decoded document stream where they can, and over
//! raw text where the check is inherently line-oriented (templated
//! manifests are not always valid YAML). The raw-text secret scan is a
//! fallback, gated strictly behind a failed decode that produced nothing.

use std::path::Path;

use regex::Regex;
use serde_yaml::Value;

use crate::config::GitopsConfig;
use crate::error::{Error, Result};
use crate::issue::Issue;
use crate::loader;

/// Annotation that parks a resource out of reconciliation.
const SKIP_RECONCILE_ANNOTATION: &str = "argocd.argoproj.io/skip-reconcile";

/// Directory prefixes where Application manifests may live, relative to
/// the repository root.
const APPLICATION_PREFIXES: &[&[&str]] = &[
    &["apps", "argocd", "applications"],
    &["apps", "argocd", "disabled"],
];

/// Line-anchored patterns compiled once per checker construction.
pub struct ManifestPatterns {
    kind_application: Regex,
    kind_secret: Regex,
    kind_sealed_secret: Regex,
    ownership_label: Regex,
    chart_reference: Regex,
}

impl ManifestPatterns {
    pub fn new(config: &GitopsConfig) -> Result<Self> {
        let ownership = format!(
            r"(?m)^\s*{}:\s*{}\b",
            regex::escape(&config.ownership_label),
            regex::escape(&config.ownership_value),
        );

        Ok(Self {
            kind_application: compile(r"(?m)^kind:\s*Application(?:Set)?\b")?,
            kind_secret: compile(r"(?m)^kind:\s*Secret\b")?,
            kind_sealed_secret: compile(r"(?m)^kind:\s*SealedSecret\b")?,
            ownership_label: compile(&ownership)?,
            chart_reference: compile(r"(?m)^\s*chart:\s*\S+")?,
        })
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::Pattern(e.to_string()))
}

/// Apply all per-file rules to one manifest.
pub fn check_manifest(
    path: &Path,
    repo: &Path,
    text: &str,
    patterns: &ManifestPatterns,
    config: &GitopsConfig,
) -> Vec<Issue> {
    let mut issues = check_plain_secrets(text, patterns);

    if text.contains(SKIP_RECONCILE_ANNOTATION) {
        issues.push(Issue::warning(
            "skip-reconcile annotation present (recovery-only)",
        ));
    }

    if patterns.kind_application.is_match(text) {
        let rel = path.strip_prefix(repo).unwrap_or(path);
        if !is_application_path(rel) {
            issues.push(Issue::error(
                "ArgoCD Application manifest outside apps/argocd/{applications,disabled}",
            ));
        }

        if !patterns.ownership_label.is_match(text) {
            issues.push(Issue::error(format!(
                "ArgoCD Application missing {}: {} label",
                config.ownership_label, config.ownership_value,
            )));
        }

        if patterns.chart_reference.is_match(text) {
            issues.push(Issue::error(
                "ArgoCD Application uses chart: (direct Helm repo); use wrapper chart path",
            ));
        }
    }

    issues
}

/// Document-aware plain-Secret detection with a raw-text fallback.
///
/// Every decodable mapping document with `kind: Secret` fires. The regex
/// fallback runs only when the stream failed to decode and the decoded
/// prefix produced no findings.
fn check_plain_secrets(text: &str, patterns: &ManifestPatterns) -> Vec<Issue> {
    let stream = loader::load_documents(text);

    let mut issues: Vec<Issue> = stream
        .documents
        .iter()
        .filter(|doc| doc.get("kind").and_then(Value::as_str) == Some("Secret"))
        .map(|_| Issue::error("Plain Secret found; use SealedSecrets"))
        .collect();

    if stream.is_clean() || !issues.is_empty() {
        return issues;
    }

    if patterns.kind_secret.is_match(text) && !patterns.kind_sealed_secret.is_match(text) {
        issues.push(Issue::error("Plain Secret found; use SealedSecrets"));
    }
    issues
}

/// Whether a repository-relative path sits under an allowed Application
/// directory.
fn is_application_path(rel: &Path) -> bool {
    let parts: Vec<&str> = rel
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();

    APPLICATION_PREFIXES
        .iter()
        .any(|prefix| parts.windows(prefix.len()).any(|w| w == *prefix))
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
