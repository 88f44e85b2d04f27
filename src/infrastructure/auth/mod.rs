//! Authentication infrastructure module
//!
//! This module provides JWT token signing for registered users.

mod jwt;

pub use jwt::{JwtConfig, JwtSigner, TokenClaims, TokenSigner};

#[cfg(test)]
pub use jwt::MockTokenSigner;
