//! Unified error handling for nodekit core.
//!
//! Wraps domain and application errors behind one type that carries
//! user-actionable suggestions and a display category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for nodekit core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NodekitError {
    /// Errors from the domain layer (rejected input, malformed documents).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, subprocesses, prompts).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl NodekitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// The user backed out of a prompt. Not a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Cancelled))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type NodekitResult<T> = Result<T, NodekitError>;
