//! Error types for appman
//!
//! Uses `thiserror` for library errors; binaries map fatal errors to exit
//! code 1.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for appman operations
pub type AppmanResult<T> = Result<T, AppmanError>;

/// Main error type for appman operations
#[derive(Error, Debug)]
pub enum AppmanError {
    /// Work directory autodetection failed and no --workdir was given
    #[error("workdir autodetection failed: {candidate} does not exist")]
    WorkdirNotFound { candidate: PathBuf },

    /// An explicitly named webignore file does not exist
    #[error("webignore not found: {path}")]
    IgnoreFileNotFound { path: PathBuf },

    /// A webignore pattern could not be compiled
    #[error("invalid webignore pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Directory creation failed
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Recursive directory removal failed
    #[error("failed to remove directory {path}: {source}")]
    RemoveDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File removal failed
    #[error("failed to remove file {path}: {source}")]
    RemoveFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Recursive copy failed
    #[error("failed to copy {from} -> {to}: {source}")]
    CopyTree {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    /// Reading a file failed
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An external tool could not be launched
    #[error("failed to launch {tool}: {source}")]
    ToolSpawn {
        tool: String,
        source: std::io::Error,
    },

    /// An external tool exited with a non-zero code
    #[error("{tool} failed with code: {code}")]
    ToolFailed { tool: String, code: i32 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
