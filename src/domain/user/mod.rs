//! User domain
//!
//! This module provides domain types for user registration, including the
//! persisted record, the request payload, validation, and the store trait.

mod entity;
mod repository;
mod validation;

pub use entity::{RegisteredUser, RegistrationRequest, UserRecord};
pub use repository::UserStore;
pub use validation::{missing_fields, validate_registration};

#[cfg(test)]
pub use repository::MockUserStore;
