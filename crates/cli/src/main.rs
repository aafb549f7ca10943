// SPDX-License-Identifier: MIT
// Copyright (c) 2026 m0sh1.cc

//! Opsguard CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use opsguard::cli::{Cli, Command};
use opsguard::error::ExitCode;

mod cmd_gitops;
mod cmd_playbooks;

fn init_logging() {
    let filter = EnvFilter::try_from_env("OPSGUARD_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("opsguard: {}", e);
            match e.downcast_ref::<opsguard::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::ConfigError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Playbooks(args) => cmd_playbooks::run(&cli, args),
        Command::Gitops(args) => cmd_gitops::run(&cli, args),
        Command::Completions(args) => {
            opsguard::completions::print(args.shell);
            Ok(ExitCode::Success)
        }
    }
}
