//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The output sink refused the greeting.
    #[error("Failed to write greeting: {reason}")]
    WriteFailed { reason: String },

    /// Writer access failed (lock poisoned).
    #[error("Greeting writer is unavailable")]
    WriterLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::WriteFailed { reason } => vec![
                format!("Output failed: {reason}"),
                "Check that standard output is still open (e.g. the pipe reader did not exit)"
                    .into(),
            ],
            Self::WriterLockError => vec![
                "A previous write panicked while holding the output buffer".into(),
                "This is likely a bug, please report it".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::WriteFailed { .. } | Self::WriterLockError => ErrorCategory::Internal,
        }
    }
}
