use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// One or more registration fields were empty or absent
    #[error("Missing parameter(s): \"{}\"", .fields.join(", "))]
    MissingParameters { fields: Vec<&'static str> },

    #[error("Passwords don't match")]
    PasswordMismatch,

    #[error("Hashing error: {message}")]
    Hashing { message: String },

    #[error("Signing error: {message}")]
    Signing { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn missing_parameters(fields: Vec<&'static str>) -> Self {
        Self::MissingParameters { fields }
    }

    pub fn hashing(message: impl Into<String>) -> Self {
        Self::Hashing {
            message: message.into(),
        }
    }

    pub fn signing(message: impl Into<String>) -> Self {
        Self::Signing {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Whether the error comes from a collaborator rather than from caller input
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Hashing { .. } | Self::Signing { .. } | Self::Storage { .. }
        )
    }
}
