//! Error types for the library console

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error on {}: {message}", .path.display())]
    Storage { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed")]
    InputClosed,
}

impl AppError {
    /// Build a storage error for `path` from any displayable cause
    pub fn storage(path: &Path, cause: impl std::fmt::Display) -> Self {
        AppError::Storage {
            path: path.to_path_buf(),
            message: cause.to_string(),
        }
    }

    /// Whether the console should report this error and carry on
    pub fn is_user_facing(&self) -> bool {
        matches!(self, AppError::NotFound(_) | AppError::Validation(_))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        AppError::Validation(messages.join(", "))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
