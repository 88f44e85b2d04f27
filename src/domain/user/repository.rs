//! User store trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::UserRecord;
use crate::domain::DomainError;

/// Append-only storage for user records
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Append a record; it is visible to every later `get_all`
    async fn save(&self, user: UserRecord) -> Result<(), DomainError>;

    /// All records in insertion order. An empty store yields an empty list.
    async fn get_all(&self) -> Result<Vec<UserRecord>, DomainError>;
}
