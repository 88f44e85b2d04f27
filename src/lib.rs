//! Users API
//!
//! HTTP service for registering users and listing the directory:
//! - Request validation with ordered missing-field reporting
//! - Bcrypt password hashing
//! - In-memory, append-only user store
//! - Signed JWT issuance on registration

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::str::FromStr;
use std::sync::Arc;

use anyhow::{ensure, Context};
use chrono::Duration;
use jsonwebtoken::Algorithm;
use tracing::info;

use api::state::AppState;
use infrastructure::{
    auth::{JwtConfig, JwtSigner},
    user::{
        BcryptHasher, InMemoryUserStore, RegistrationSettings, UserService, MAX_HASH_COST,
        MAX_TOKEN_TTL_MINUTES, MIN_HASH_COST,
    },
};

/// Build application state from configuration
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let algorithm = Algorithm::from_str(&config.auth.jwt_algorithm)
        .with_context(|| format!("Unknown JWT algorithm '{}'", config.auth.jwt_algorithm))?;
    ensure!(
        matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512),
        "JWT algorithm '{}' does not sign with a shared secret",
        config.auth.jwt_algorithm
    );
    ensure!(
        (MIN_HASH_COST..=MAX_HASH_COST).contains(&config.auth.hash_cost),
        "Hash cost {} outside {}..={}",
        config.auth.hash_cost,
        MIN_HASH_COST,
        MAX_HASH_COST
    );
    ensure!(
        (1..=MAX_TOKEN_TTL_MINUTES).contains(&config.auth.token_ttl_minutes),
        "Token TTL of {} minutes outside 1..={}",
        config.auth.token_ttl_minutes,
        MAX_TOKEN_TTL_MINUTES
    );

    let signer = JwtSigner::new(
        JwtConfig::new(config.auth.jwt_secret.clone()).with_algorithm(algorithm),
    );

    let settings = RegistrationSettings {
        hash_cost: config.auth.hash_cost,
        token_ttl: Duration::minutes(config.auth.token_ttl_minutes),
    };

    info!(
        hash_cost = settings.hash_cost,
        token_ttl_minutes = config.auth.token_ttl_minutes,
        algorithm = ?algorithm,
        "Using in-memory user store"
    );

    let user_service = UserService::new(
        Arc::new(BcryptHasher::new()),
        Arc::new(InMemoryUserStore::new()),
        Arc::new(signer),
        settings,
    );

    Ok(AppState::new(user_service))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app_state_with_defaults() {
        assert!(create_app_state(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_create_app_state_rejects_unknown_algorithm() {
        let mut config = AppConfig::default();
        config.auth.jwt_algorithm = "HS999".to_string();

        assert!(create_app_state(&config).is_err());
    }

    #[test]
    fn test_create_app_state_rejects_non_hmac_algorithm() {
        for name in ["RS256", "ES256", "EdDSA"] {
            let mut config = AppConfig::default();
            config.auth.jwt_algorithm = name.to_string();

            assert!(create_app_state(&config).is_err(), "{name} accepted");
        }
    }

    #[test]
    fn test_create_app_state_accepts_hmac_algorithms() {
        for name in ["HS256", "HS384", "HS512"] {
            let mut config = AppConfig::default();
            config.auth.jwt_algorithm = name.to_string();

            assert!(create_app_state(&config).is_ok(), "{name} rejected");
        }
    }

    #[test]
    fn test_create_app_state_rejects_hash_cost_out_of_range() {
        for cost in [0, 3, 32, 99] {
            let mut config = AppConfig::default();
            config.auth.hash_cost = cost;

            assert!(create_app_state(&config).is_err(), "cost {cost} accepted");
        }
    }

    #[test]
    fn test_create_app_state_rejects_token_ttl_out_of_range() {
        for ttl in [0, -5, MAX_TOKEN_TTL_MINUTES + 1, 1_000_000_000_000] {
            let mut config = AppConfig::default();
            config.auth.token_ttl_minutes = ttl;

            assert!(create_app_state(&config).is_err(), "ttl {ttl} accepted");
        }
    }
}
