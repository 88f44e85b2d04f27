//! JWT token signing

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[cfg(test)]
use mockall::automock;

use crate::domain::DomainError;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject name
    pub name: String,
    /// Subject email
    pub email: String,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

/// Configuration for the JWT signer
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared secret for signing tokens
    pub secret: String,
    /// Signing algorithm; must belong to the HMAC family
    pub algorithm: Algorithm,
}

impl JwtConfig {
    /// Create a new HS256 configuration
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Trait for issuing signed tokens
#[cfg_attr(test, automock)]
pub trait TokenSigner: Send + Sync {
    /// Sign a token for the subject, valid until `expires_at` (Unix seconds)
    fn sign(&self, name: &str, email: &str, expires_at: i64) -> Result<String, DomainError>;
}

/// JWT signer using a shared secret
#[derive(Clone)]
pub struct JwtSigner {
    config: JwtConfig,
    encoding_key: EncodingKey,
}

impl Debug for JwtSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSigner")
            .field("algorithm", &self.config.algorithm)
            .field("encoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtSigner {
    /// Create a new JWT signer with the given configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
        }
    }
}

impl TokenSigner for JwtSigner {
    fn sign(&self, name: &str, email: &str, expires_at: i64) -> Result<String, DomainError> {
        if self.config.secret.is_empty() {
            return Err(DomainError::signing("Signing key is empty"));
        }

        let claims = TokenClaims {
            name: name.to_string(),
            email: email.to_string(),
            exp: expires_at,
        };

        encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| DomainError::signing(format!("Failed to generate JWT: {}", e)))
    }
}
