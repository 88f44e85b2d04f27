//! Registration request validation

use super::entity::RegistrationRequest;
use crate::domain::DomainError;

/// Wire names of the required fields that are empty, in check order
pub fn missing_fields(request: &RegistrationRequest) -> Vec<&'static str> {
    request
        .required_fields()
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
}

/// Validate a registration request.
///
/// Presence is checked before confirmation, so an empty confirmation is
/// reported as missing rather than as a mismatch.
pub fn validate_registration(request: &RegistrationRequest) -> Result<(), DomainError> {
    let missing = missing_fields(request);

    if !missing.is_empty() {
        return Err(DomainError::missing_parameters(missing));
    }

    if request.password != request.password_confirm {
        return Err(DomainError::PasswordMismatch);
    }

    Ok(())
}
