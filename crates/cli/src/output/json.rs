// SPDX-License-Identifier: MIT
// Copyright (c) 2026 m0sh1.cc

//! JSON output formatter.
//!
//! Buffered and written at the end, not streamed. Field order is the
//! struct declaration order, so reports are byte-stable across runs.

use serde::Serialize;

use crate::issue::{Issue, RunReport};

#[derive(Serialize)]
struct JsonReport<'a> {
    scope: &'a str,
    files_checked: usize,
    issues: &'a [Issue],
}

/// Render the report as pretty-printed JSON.
pub fn render(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        scope: report.scope(),
        files_checked: report.files_checked(),
        issues: report.issues(),
    })
}

/// Write the report to stdout.
pub fn write_report(report: &RunReport) -> anyhow::Result<()> {
    println!("{}", render(report)?);
    Ok(())
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
