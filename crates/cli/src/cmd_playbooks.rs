// SPDX-License-Identifier: MIT
// Copyright (c) 2026 m0sh1.cc

//! Playbooks command implementation.

use opsguard::cli::{Cli, OutputFormat, PlaybooksArgs};
use opsguard::config;
use opsguard::error::ExitCode;
use opsguard::issue::{Issue, RunReport};
use opsguard::output::json;
use opsguard::output::text::TextFormatter;
use opsguard::playbook::PlaybookChecker;

/// Run the playbooks command.
pub fn run(cli: &Cli, args: &PlaybooksArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let cfg = config::resolve(cli.config.as_deref(), &cwd)?;

    let checker = PlaybookChecker::new(&cfg.playbooks, args.strict)?;
    let mut report = RunReport::new("playbooks");

    for path in &args.paths {
        if !path.exists() {
            eprintln!("ERROR: File not found: {}", path.display());
            continue;
        }

        tracing::debug!("checking {}", path.display());
        let issues = match std::fs::read_to_string(path) {
            Ok(text) => checker.check_text(&text),
            Err(err) => vec![Issue::error(format!("Failed to read file: {}", err))],
        };
        report.record_file(path, issues);
    }

    match args.output {
        OutputFormat::Text => {
            let color = opsguard::output::resolve_color(args.color, args.no_color);
            TextFormatter::new(color, args.summary).write_report(&report)?;
        }
        OutputFormat::Json => json::write_report(&report)?,
    }

    Ok(report.exit_code(args.strict))
}
