//! In-memory user store implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{UserRecord, UserStore};
use crate::domain::DomainError;

/// In-memory implementation of UserStore. Contents live for the process lifetime.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Vec<UserRecord>>>,
}

impl InMemoryUserStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn save(&self, user: UserRecord) -> Result<(), DomainError> {
        self.users.write().await.push(user);
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<UserRecord>, DomainError> {
        Ok(self.users.read().await.clone())
    }
}
