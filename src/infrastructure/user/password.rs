//! Password hashing utilities using bcrypt

#[cfg(test)]
use mockall::automock;

use crate::domain::DomainError;

/// Work factor used for new registrations
pub const DEFAULT_HASH_COST: u32 = 10;

/// Work factors bcrypt accepts
pub const MIN_HASH_COST: u32 = 4;
pub const MAX_HASH_COST: u32 = 31;

/// Trait for password hashing operations
#[cfg_attr(test, automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a password with the given work factor
    fn hash(&self, password: &str, cost: u32) -> Result<String, DomainError>;
}

/// Bcrypt-based password hasher
#[derive(Debug, Clone, Default)]
pub struct BcryptHasher;

impl BcryptHasher {
    /// Create a new bcrypt hasher
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str, cost: u32) -> Result<String, DomainError> {
        bcrypt::hash(password, cost)
            .map_err(|e| DomainError::hashing(format!("Failed to hash password: {}", e)))
    }
}
