use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Invalid name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec![
                "Pass a name with at least one visible character".into(),
                "Example: greeter greet --name Alice".into(),
            ],
            Self::InvalidName { reason, .. } => vec![
                format!("The name was rejected because it {reason}"),
                "Names are printed on a single line; remove newlines and tabs".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{field}'"),
                format!("Or set defaults.{field} in the configuration file"),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyName | Self::InvalidName { .. } | Self::MissingRequiredField { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}
