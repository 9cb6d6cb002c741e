//! Error types and handling for mkenv
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructor helpers live in sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`config`]: Configuration errors
//! - [`pipeline`]: Environment build and install errors

pub mod config;
pub mod fs;
pub mod pipeline;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mkenv operations
#[derive(Error, Diagnostic, Debug)]
pub enum MkenvError {
    // Usage errors
    #[error("Invalid usage: {message}")]
    #[diagnostic(code(mkenv::usage), help("Run 'mkenv --help' for the list of options"))]
    Usage { message: String },

    // Preflight errors
    #[error("Please deactivate the current virtualenv using \"deactivate\"")]
    #[diagnostic(
        code(mkenv::preflight::env_active),
        help("The interpreter '{python}' belongs to the active environment at {virtual_env}")
    )]
    EnvironmentAlreadyActive { virtual_env: String, python: String },

    #[error("File {path} not found")]
    #[diagnostic(
        code(mkenv::preflight::missing_file),
        help("Requirement files are resolved relative to the project root (--project)")
    )]
    MissingFile { path: String },

    // Build errors
    #[error("md5 hash of file {filename} does not match")]
    #[diagnostic(
        code(mkenv::build::checksum_mismatch),
        help("Expected {expected}, got {actual}. The download was discarded")
    )]
    ChecksumMismatch {
        filename: String,
        expected: String,
        actual: String,
    },

    #[error("Could not setup virtualenv in {target}")]
    #[diagnostic(
        code(mkenv::build::failed),
        help("Check that virtualenv is installed for the interpreter, or rerun with --debug")
    )]
    BuildFailed { target: String },

    #[error("Failed to download {url}: {reason}")]
    #[diagnostic(code(mkenv::build::download_failed))]
    Download { url: String, reason: String },

    // Install errors
    #[error("Installation of requirements from {file} failed")]
    #[diagnostic(
        code(mkenv::install::failed),
        help("Rerun with --debug to see the installer output")
    )]
    InstallFailed { file: String },

    // Process errors
    #[error("Failed to run '{program}': {reason}")]
    #[diagnostic(code(mkenv::process::spawn_failed))]
    Spawn { program: String, reason: String },

    // Configuration errors
    #[error("Failed to parse configuration file {path}: {reason}")]
    #[diagnostic(code(mkenv::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file {path}: {reason}")]
    #[diagnostic(code(mkenv::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to remove {path}: {reason}")]
    #[diagnostic(code(mkenv::fs::remove_failed))]
    RemoveFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(mkenv::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mkenv::fs::io_error))]
    IoError { message: String },
}

impl MkenvError {
    /// Process exit status for this error: 2 for bad invocations, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        match self {
            MkenvError::Usage { .. } => 2,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for MkenvError {
    fn from(err: std::io::Error) -> Self {
        MkenvError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for MkenvError {
    fn from(err: serde_yaml::Error) -> Self {
        MkenvError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MkenvError>;
