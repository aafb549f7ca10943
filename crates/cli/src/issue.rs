//! Issue types and run-level aggregation.

use std::path::Path;

use serde::Serialize;

use crate::error::ExitCode;

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Uppercase label used in text reports.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

/// A single finding. Created once by the rule that fired it; immutable
/// afterwards apart from the owning file path stamped by the aggregator.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub severity: Severity,

    /// Input file (or directory) the finding belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// In-document address, e.g. `play[0].tasks[2].block[0]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Issue {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            path: None,
            location: None,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Create an error-severity issue.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning-severity issue.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create an info-severity issue.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Attach an in-document location.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Attach the owning file or directory path.
    pub fn in_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach remediation advice.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Append-only collection of findings across one run.
///
/// The exit policy is computed once, after every file has been processed,
/// so summary output always reflects full counts.
#[derive(Debug)]
pub struct RunReport {
    scope: String,
    files_checked: usize,
    issues: Vec<Issue>,
}

impl RunReport {
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            files_checked: 0,
            issues: Vec::new(),
        }
    }

    /// Record one checked file and its issues. Issues that do not already
    /// carry a path are stamped with this file's path.
    pub fn record_file(&mut self, path: &Path, issues: Vec<Issue>) {
        self.files_checked += 1;
        for mut issue in issues {
            if issue.path.is_none() {
                issue.path = Some(path.display().to_string());
            }
            self.issues.push(issue);
        }
    }

    /// Record issues that already carry their own path (directory-level
    /// findings) without counting a checked file.
    pub fn record(&mut self, issues: Vec<Issue>) {
        self.issues.extend(issues);
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn files_checked(&self) -> usize {
        self.files_checked
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn total_issues(&self) -> usize {
        self.issues.len()
    }

    /// Number of issues at a given severity.
    pub fn severity_count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// Distinct paths that produced at least one issue, in first-seen order.
    pub fn paths_with_issues(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = Vec::new();
        for issue in &self.issues {
            if let Some(path) = issue.path.as_deref()
                && !paths.contains(&path)
            {
                paths.push(path);
            }
        }
        paths
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Exit policy: any error fails; under strict mode any issue fails.
    pub fn exit_code(&self, strict: bool) -> ExitCode {
        if self.has_errors() {
            return ExitCode::IssuesFound;
        }
        if strict && !self.issues.is_empty() {
            return ExitCode::IssuesFound;
        }
        ExitCode::Success
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
