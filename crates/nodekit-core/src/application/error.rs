//! Application layer errors.
//!
//! These errors represent failures at the edges: prompts, subprocesses, and
//! the filesystem. Rejected input and bad document shapes are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The user dismissed a prompt.
    #[error("setup cancelled")]
    Cancelled,

    /// A plugin required by the ESLint config is not installed.
    #[error("ESLint plugin '{plugin}' is not installed")]
    MissingPlugin {
        plugin: String,
        install_command: String,
    },

    /// A subprocess could not be started or exited unsuccessfully.
    #[error("command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An existing JSON file could not be parsed.
    #[error("{path} is not valid JSON: {reason}")]
    MalformedFile { path: PathBuf, reason: String },

    /// `package.json` is required but absent.
    #[error("{path} not found")]
    ManifestNotFound { path: PathBuf },

    /// The prompt backend itself failed (no terminal, I/O error).
    #[error("prompt failed: {reason}")]
    PromptFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Cancelled => vec![],
            Self::MissingPlugin {
                plugin,
                install_command,
            } => vec![
                format!("Please install it: {install_command}"),
                format!("Then run the setup again so '{plugin}' can be loaded"),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Run `{command}` manually to see the full output"),
                "Check your network connection and package registry access".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::MalformedFile { path, .. } => vec![
                format!("Fix the JSON syntax in {}", path.display()),
            ],
            Self::ManifestNotFound { .. } => vec![
                "Run this command from the project root".into(),
                "Create one with: npm init -y".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Run nodekit from an interactive terminal".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Cancelled | Self::MalformedFile { .. } => ErrorCategory::Validation,
            Self::MissingPlugin { .. } | Self::ManifestNotFound { .. } => ErrorCategory::NotFound,
            Self::PromptFailed { .. } => ErrorCategory::Configuration,
            Self::CommandFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
