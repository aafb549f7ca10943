// SPDX-License-Identifier: MIT
// Copyright (c) 2026 m0sh1.cc

//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Generate a completion script for `shell` on stdout.
pub fn print(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "opsguard", &mut std::io::stdout());
}

#[cfg(test)]
#[path = "completions_tests.rs"]
mod tests;
