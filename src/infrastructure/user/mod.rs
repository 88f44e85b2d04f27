//! User infrastructure module
//!
//! This module provides implementations for user registration, including
//! password hashing with bcrypt, the in-memory store, and the user service.

mod password;
mod repository;
mod service;

pub use password::{
    BcryptHasher, PasswordHasher, DEFAULT_HASH_COST, MAX_HASH_COST, MIN_HASH_COST,
};
pub use repository::InMemoryUserStore;
pub use service::{
    RegistrationSettings, UserService, DEFAULT_TOKEN_TTL_MINUTES, MAX_TOKEN_TTL_MINUTES,
};

#[cfg(test)]
pub use password::MockPasswordHasher;
