use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for build-version operations
#[derive(Error, Debug)]
pub enum BuildVersionError {
    #[error("External tool error: `{command}` failed with status {status}: {stderr}")]
    ExternalTool {
        command: String,
        status: i32,
        stderr: String,
    },

    #[error("External tool error: cannot run `{command}`: {error}")]
    Launch {
        command: String,
        error: std::io::Error,
    },

    #[error("External tool error: output of `{command}` is not valid UTF-8")]
    Encoding { command: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("Encountered commit with multiple tags: {}", .0.join(", "))]
    AmbiguousTags(Vec<String>),

    #[error("Cannot read {}: {error}", .path.display())]
    ReadFile { path: PathBuf, error: std::io::Error },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),
}

/// Convenience type alias for Results in build-version
pub type Result<T> = std::result::Result<T, BuildVersionError>;

impl BuildVersionError {
    /// Create a declaration parse error with context
    pub fn config_parse(msg: impl Into<String>) -> Self {
        BuildVersionError::ConfigParse(msg.into())
    }

    /// Create a settings error with context
    pub fn settings(msg: impl Into<String>) -> Self {
        BuildVersionError::Settings(msg.into())
    }

    /// Create an error for a subprocess that exited unsuccessfully
    pub fn external_tool(
        command: impl Into<String>,
        status: i32,
        stderr: impl Into<String>,
    ) -> Self {
        BuildVersionError::ExternalTool {
            command: command.into(),
            status,
            stderr: stderr.into(),
        }
    }

    /// Create a read error for the file at `path`
    pub fn read_file(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        BuildVersionError::ReadFile {
            path: path.into(),
            error,
        }
    }
}
