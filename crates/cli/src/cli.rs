// SPDX-License-Identifier: MIT
// Copyright (c) 2026 m0sh1.cc

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Guard-rail linters for infrastructure-as-code repositories
#[derive(Parser)]
#[command(name = "opsguard")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "OPSGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check automation playbooks for idempotency issues
    Playbooks(PlaybooksArgs),
    /// Check a GitOps repository for layout and secret issues
    Gitops(GitopsArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct PlaybooksArgs {
    /// Playbook files to check
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Report suppressed informational findings and fail on any issue
    #[arg(long)]
    pub strict: bool,

    /// Show only the summary, not individual issues
    #[arg(long)]
    pub summary: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct GitopsArgs {
    /// Path to the GitOps repository to check
    #[arg(long, value_name = "PATH")]
    pub repo: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Fail on warnings as well as errors
    #[arg(long)]
    pub strict: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text grouped by severity
    Text,
    /// Machine-readable JSON with stable key order
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
