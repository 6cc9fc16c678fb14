//! Crate-level error surface.
//!
//! [`FormaError`] folds the domain and pipeline error families into one
//! type for callers that do not care which layer refused, while keeping
//! the per-layer enums available for callers that match on them.

use thiserror::Error;

use crate::domain::DomainError;
use crate::pipeline::PipelineError;

pub use crate::domain::ErrorCategory;

/// Any error forma-core can produce.
#[derive(Debug, Error, Clone)]
pub enum FormaError {
    /// Config or contract violation from the domain layer.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Resolution or execution failure from the pipeline layer.
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl FormaError {
    /// User-actionable suggestions, delegated to the wrapped error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Pipeline(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Forma".into(),
                "Please report this issue at: https://github.com/forma-dev/forma/issues".into(),
            ],
        }
    }

    /// Category for display/exit-code decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Pipeline(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Convenient result type alias.
pub type FormaResult<T> = Result<T, FormaError>;
