pub mod cli;
pub mod completions;
pub mod config;
pub mod error;
pub mod gitops;
pub mod issue;
pub mod loader;
pub mod output;
pub mod playbook;
pub mod walker;

pub use cli::{Cli, Command, GitopsArgs, OutputFormat, PlaybooksArgs};
pub use config::{Config, GitopsConfig, PlaybookConfig};
pub use error::{Error, ExitCode, Result};
pub use issue::{Issue, RunReport, Severity};

#[cfg(test)]
pub mod test_utils;
