// SPDX-License-Identifier: MIT
// Copyright (c) 2026 m0sh1.cc

//! Gitops command implementation.

use opsguard::cli::{Cli, GitopsArgs, OutputFormat};
use opsguard::config;
use opsguard::error::{Error, ExitCode};
use opsguard::gitops::GitopsChecker;
use opsguard::output::json;
use opsguard::output::text::TextFormatter;

/// Run the gitops command.
pub fn run(cli: &Cli, args: &GitopsArgs) -> anyhow::Result<ExitCode> {
    let repo = &args.repo;
    if !repo.exists() {
        return Err(Error::Argument(format!(
            "repo path does not exist: {}",
            repo.display()
        ))
        .into());
    }
    if !repo.is_dir() {
        return Err(Error::Argument(format!(
            "repo path is not a directory: {}",
            repo.display()
        ))
        .into());
    }

    let cfg = config::resolve(cli.config.as_deref(), repo)?;
    let checker = GitopsChecker::new(&cfg.gitops)?;
    let report = checker.run(repo);

    match args.output {
        OutputFormat::Text => {
            let color = opsguard::output::resolve_color(args.color, args.no_color);
            TextFormatter::new(color, false).write_report(&report)?;
        }
        OutputFormat::Json => json::write_report(&report)?,
    }

    Ok(report.exit_code(args.strict))
}
