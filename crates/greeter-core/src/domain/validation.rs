use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// A name must contain something visible and fit on one line.
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        if let Some(c) = name.chars().find(|c| c.is_control()) {
            return Err(DomainError::InvalidName {
                name: name.to_owned(),
                reason: format!("contains the control character {c:?}"),
            });
        }
        Ok(())
    }
}
