//! User service for registration and listing

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::domain::user::{
    validate_registration, RegisteredUser, RegistrationRequest, UserRecord, UserStore,
};
use crate::domain::DomainError;
use crate::infrastructure::auth::TokenSigner;

use super::password::{PasswordHasher, DEFAULT_HASH_COST};

/// Wire names of every required registration field
const ALL_FIELDS: [&str; 4] = ["Name", "Email", "Password", "PasswordConfirm"];

/// Default token validity window
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 15;

/// Longest accepted token validity window (one year)
pub const MAX_TOKEN_TTL_MINUTES: i64 = 60 * 24 * 365;

/// Tunables for registration
#[derive(Debug, Clone, Copy)]
pub struct RegistrationSettings {
    /// Bcrypt work factor
    pub hash_cost: u32,
    /// Token validity window
    pub token_ttl: Duration,
}

impl Default for RegistrationSettings {
    fn default() -> Self {
        Self {
            hash_cost: DEFAULT_HASH_COST,
            token_ttl: Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
        }
    }
}

/// User service owning the hasher, store, and signer
#[derive(Clone)]
pub struct UserService {
    hasher: Arc<dyn PasswordHasher>,
    store: Arc<dyn UserStore>,
    signer: Arc<dyn TokenSigner>,
    settings: RegistrationSettings,
}

impl UserService {
    /// Create a new user service
    pub fn new(
        hasher: Arc<dyn PasswordHasher>,
        store: Arc<dyn UserStore>,
        signer: Arc<dyn TokenSigner>,
        settings: RegistrationSettings,
    ) -> Self {
        Self {
            hasher,
            store,
            signer,
            settings,
        }
    }

    /// Register a user from a raw request body.
    ///
    /// Each step short-circuits: nothing is stored when hashing fails and
    /// no token is signed when storing fails.
    pub async fn register(
        &self,
        body: &[u8],
        now: DateTime<Utc>,
    ) -> Result<RegisteredUser, DomainError> {
        if body.is_empty() {
            return Err(DomainError::missing_parameters(ALL_FIELDS.to_vec()));
        }

        let request = RegistrationRequest::from_body(body);
        validate_registration(&request)?;

        let password_hash = self
            .hasher
            .hash(&request.password, self.settings.hash_cost)?;

        let user = UserRecord::new(request.name, request.email, password_hash);
        self.store.save(user.clone()).await?;
        debug!(name = %user.name(), "User stored");

        let expires_at = now
            .checked_add_signed(self.settings.token_ttl)
            .ok_or_else(|| DomainError::signing("Token expiry out of range"))?
            .timestamp();
        let token = self.signer.sign(user.name(), user.email(), expires_at)?;

        info!(name = %user.name(), expires_at, "User registered");

        Ok(RegisteredUser { user, token })
    }

    /// List every stored user
    pub async fn list(&self) -> Result<Vec<UserRecord>, DomainError> {
        self.store.get_all().await
    }
}
