// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so services can report and propagate the same value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("commit type catalog is empty")]
    EmptyCommitCatalog,

    #[error("duplicate commit type '{commit_type}'")]
    DuplicateCommitType { commit_type: String },

    #[error("commit type '{commit_type}' must be lower-case")]
    InvalidCommitType { commit_type: String },

    // ========================================================================
    // Document shape errors
    // ========================================================================
    /// An existing JSON document does not have the shape a patch expects.
    #[error("{document} is malformed: {reason}")]
    MalformedDocument {
        document: &'static str,
        reason: String,
    },

    /// A generated document could not be encoded.
    #[error("could not encode {document}: {reason}")]
    Encoding {
        document: &'static str,
        reason: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyCommitCatalog => {
                vec!["Keep at least one commit type in the catalog".into()]
            }
            Self::DuplicateCommitType { commit_type } => vec![
                format!("Commit type '{commit_type}' appears more than once"),
                "Each commit type must be unique".into(),
            ],
            Self::InvalidCommitType { commit_type } => vec![format!(
                "Rename '{commit_type}' to '{}'",
                commit_type.to_lowercase()
            )],
            Self::MalformedDocument { document, .. } => vec![
                format!("Check that {document} is a JSON object"),
                format!("Fix or remove {document} and run the command again"),
            ],
            Self::Encoding { .. } => vec!["This is a bug; please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    ///
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Encoding { .. } => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}
