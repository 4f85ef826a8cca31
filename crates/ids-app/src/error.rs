//! Error types for the ids-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A user-input precondition failed; the message is shown verbatim.
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file: {path}")]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// The bare message for validation failures, suitable for direct
    /// display next to the trigger control.
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            AppError::Validation(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Result type for ids-app operations.
pub type AppResult<T> = Result<T, AppError>;
