//! Error types for readme-sync

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for readme-sync operations
pub type Result<T> = std::result::Result<T, ReadmeSyncError>;

/// Main error type for readme-sync
#[derive(Error, Debug)]
pub enum ReadmeSyncError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// External command errors (help capture, working tree diff)
    #[error("External process error: {0}")]
    Process(#[from] ProcessError),

    /// README read/write errors
    #[error("File error: {0}")]
    File(#[from] FileError),

    /// README structure errors
    #[error("Malformed document: {0}")]
    Document(#[from] DocumentError),

    /// Check tool pre/postcondition failures
    #[error("Check failed: {0}")]
    Check(#[from] CheckError),

    /// Variable interpolation errors
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find config file (searched: {0})")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read config file '{path}': {error}")]
    Unreadable { path: PathBuf, error: String },
}

/// Failures of the external collaborators (target CLI, version control)
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Command is empty")]
    EmptyCommand,

    #[error("Failed to start '{command}': {error}")]
    Spawn { command: String, error: String },

    #[error("'{command}' exited with code {code:?}{}", format_stderr(.stderr))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("'{command}' produced output that is not valid UTF-8")]
    InvalidUtf8 { command: String },
}

/// README file access errors
#[derive(Error, Debug)]
pub enum FileError {
    #[error("README not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read '{path}': {error}")]
    Read { path: PathBuf, error: String },

    #[error("Failed to write '{path}': {error}")]
    Write { path: PathBuf, error: String },
}

/// Structural problems with the help block markers
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Marker '{0}' not found")]
    MissingMarker(String),

    #[error("Marker '{marker}' appears {count} times, expected exactly once")]
    DuplicateMarker { marker: String, count: usize },

    #[error("Marker '{end}' appears before '{start}'")]
    MarkersOutOfOrder { start: String, end: String },

    #[error("Markers must not be empty")]
    EmptyMarker,

    #[error("Help text contains the marker '{0}'")]
    MarkerInHelpText(String),
}

/// Check tool failures
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("README '{0}' has uncommitted changes; commit or revert them before checking")]
    DirtyWorkingTree(PathBuf),

    #[error("README '{path}' is not synced with the current help output")]
    StaleReadme { path: PathBuf, diff: String },
}

/// Variable interpolation errors
#[derive(Error, Debug)]
pub enum InterpolationError {
    #[error("Variable '{0}' is not defined")]
    UndefinedVariable(String),

    #[error("Recursive interpolation detected")]
    RecursiveInterpolation,
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for external processes
pub type ProcessResult<T> = std::result::Result<T, ProcessError>;

/// Specialized result type for document splicing
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

/// Specialized result type for interpolation operations
pub type InterpolationResult<T> = std::result::Result<T, InterpolationError>;

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(":\n{}", trimmed)
    }
}
