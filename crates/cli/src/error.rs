use std::path::PathBuf;

/// Opsguard error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A built-in pattern failed to compile
    #[error("pattern error: {0}")]
    Pattern(String),
}

/// Result type using opsguard Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// No blocking findings
    Success = 0,
    /// Findings under the active strictness policy
    IssuesFound = 1,
    /// Configuration or argument error
    ConfigError = 2,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::ConfigError,
            Error::Pattern(_) => ExitCode::ConfigError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
