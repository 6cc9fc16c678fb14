//! Domain-layer errors: configuration and contract validation.

use thiserror::Error;

/// Root domain error type.
///
/// Every variant is cloneable, carries a category for display styling,
/// and can name concrete next steps via [`DomainError::suggestions`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project configuration: {0}")]
    InvalidConfig(String),

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Serialization
    // ========================================================================
    #[error("Canonical serialization failed: {message}")]
    Canonicalization { message: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidConfig(msg) => vec![
                "Check your project configuration".into(),
                format!("Details: {}", msg),
                "Supported types: nextjs, fastify, library".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("The field '{}' is required", field),
                "Pass it on the command line or set it in forma.toml".into(),
            ],
            Self::Canonicalization { .. } => vec![
                "This appears to be a bug in Forma".into(),
                "Please report it with the configuration that triggered it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfig(_) | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::Canonicalization { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
