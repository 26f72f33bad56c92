//! Error types for steamcmd-core

use std::path::PathBuf;

/// Result type for steamcmd-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the tool.
///
/// The taxonomy keeps four situations apart that the underlying tool
/// conflates: caller mistakes (`Usage`), absence (`NotInstalled`),
/// corruption (`Vdf`/`Manifest`), and failures the tool itself reported
/// (`UnknownApp`/`LoginFailed`/`ToolFailed`/`Ambiguous`). Nothing is
/// retried here; transient-failure policy belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("usage error: {message}")]
    Usage { message: String },

    #[error("app {app_id} is not installed under {path}")]
    NotInstalled { app_id: u32, path: PathBuf },

    #[error("failed to parse key-value text: {0}")]
    Vdf(#[from] steamcmd_vdf::Error),

    #[error("malformed manifest at {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    #[error("app id {app_id} is unknown to the service: {detail}")]
    UnknownApp { app_id: u32, detail: String },

    #[error("login failed: {detail}")]
    LoginFailed { detail: String },

    #[error("tool reported failure: {detail}")]
    ToolFailed { detail: String },

    #[error("ambiguous tool outcome: exit code {exit_code} with no success or failure marker")]
    Ambiguous { exit_code: i32 },

    #[error("failed to launch tool binary {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub fn manifest(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Manifest {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by caller input rather than tool behavior.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}
