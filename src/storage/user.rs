use async_trait::async_trait;
use thiserror::Error;

use crate::user::{TgUserId, User};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persists the one preference a chat user has: their city.
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Returns `None` for a user that never set a city.
    async fn find(&self, tg_user_id: TgUserId) -> Result<Option<User>, StorageError>;

    /// Creates the user with `city`, or overwrites the city of the existing user.
    async fn upsert(&self, tg_user_id: TgUserId, city: &str) -> Result<User, StorageError>;
}
