//! Text output formatter.
//!
//! Per-path sections grouped by severity in the fixed order
//! `ERROR`, `WARNING`, `INFO`, followed by a run summary:
//! ```text
//! <path>
//! ======================================================================
//!
//! WARNING (1):
//!   Location: play[0].tasks[2]
//!   Issue: <message>
//!   Suggestion: <advice>
//! ```

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::issue::{Issue, RunReport, Severity};

/// Severity order for report sections.
const SEVERITY_ORDER: &[Severity] = &[Severity::Error, Severity::Warning, Severity::Info];

const RULE_WIDTH: usize = 70;

fn severity_spec(severity: Severity) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match severity {
        Severity::Error => spec.set_fg(Some(Color::Red)).set_bold(true),
        Severity::Warning => spec.set_fg(Some(Color::Yellow)).set_bold(true),
        Severity::Info => spec.set_fg(Some(Color::Cyan)),
    };
    spec
}

fn path_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Cyan));
    spec
}

/// Text report formatter with color support.
pub struct TextFormatter {
    stdout: StandardStream,
    summary_only: bool,
    issues_shown: usize,
}

impl TextFormatter {
    pub fn new(color_choice: ColorChoice, summary_only: bool) -> Self {
        Self {
            stdout: StandardStream::stdout(color_choice),
            summary_only,
            issues_shown: 0,
        }
    }

    /// Write the full report: per-path sections, then the summary.
    pub fn write_report(&mut self, report: &RunReport) -> std::io::Result<()> {
        if !self.summary_only {
            for path in report.paths_with_issues() {
                let group: Vec<&Issue> = report
                    .issues()
                    .iter()
                    .filter(|i| i.path.as_deref() == Some(path))
                    .collect();
                self.write_group(path, &group)?;
            }
        }
        self.write_summary(report)
    }

    fn write_group(&mut self, path: &str, issues: &[&Issue]) -> std::io::Result<()> {
        writeln!(self.stdout)?;
        self.stdout.set_color(&path_spec())?;
        write!(self.stdout, "{}", path)?;
        self.stdout.reset()?;
        writeln!(self.stdout)?;
        writeln!(self.stdout, "{}", "=".repeat(RULE_WIDTH))?;

        for &severity in SEVERITY_ORDER {
            let section: Vec<&&Issue> =
                issues.iter().filter(|i| i.severity == severity).collect();
            if section.is_empty() {
                continue;
            }

            writeln!(self.stdout)?;
            self.stdout.set_color(&severity_spec(severity))?;
            write!(self.stdout, "{}", severity.label())?;
            self.stdout.reset()?;
            writeln!(self.stdout, " ({}):", section.len())?;

            for issue in section {
                if let Some(location) = &issue.location {
                    writeln!(self.stdout, "  Location: {}", location)?;
                }
                writeln!(self.stdout, "  Issue: {}", issue.message)?;
                if let Some(suggestion) = &issue.suggestion {
                    writeln!(self.stdout, "  Suggestion: {}", suggestion)?;
                }
                writeln!(self.stdout)?;
                self.issues_shown += 1;
            }
        }

        Ok(())
    }

    /// Write the trailing summary block.
    pub fn write_summary(&mut self, report: &RunReport) -> std::io::Result<()> {
        writeln!(self.stdout)?;
        writeln!(self.stdout, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            self.stdout,
            "Summary: Checked {} file(s)",
            report.files_checked()
        )?;
        writeln!(self.stdout, "Total issues: {}", report.total_issues())?;

        if report.total_issues() == 0 {
            writeln!(self.stdout, "All files look good.")?;
        } else {
            writeln!(
                self.stdout,
                "Found issues in {} file(s).",
                report.paths_with_issues().len()
            )?;
        }
        Ok(())
    }

    /// Number of issues written so far.
    pub fn issues_shown(&self) -> usize {
        self.issues_shown
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
