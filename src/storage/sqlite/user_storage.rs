mod model;

use async_trait::async_trait;
use model::UserStorageModel;

use crate::storage::{StorageError, UserStorage};
use crate::user::{TgUserId, User};

pub struct SqliteUserStorage {
    pool: sqlx::SqlitePool,
}

impl SqliteUserStorage {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStorage for SqliteUserStorage {
    async fn find(&self, tg_user_id: TgUserId) -> Result<Option<User>, StorageError> {
        let mut conn = self.pool.acquire().await?;
        let user = sqlx::query_as::<_, UserStorageModel>(
            "SELECT id, tg_user_id, city FROM users WHERE tg_user_id = ?",
        )
        .bind(tg_user_id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(user.map(Into::into))
    }

    async fn upsert(&self, tg_user_id: TgUserId, city: &str) -> Result<User, StorageError> {
        let mut conn = self.pool.acquire().await?;
        let user = sqlx::query_as::<_, UserStorageModel>(
            "INSERT INTO users (tg_user_id, city)
                 VALUES (?, ?)
                 ON CONFLICT (tg_user_id) DO UPDATE SET city = excluded.city
                 RETURNING id, tg_user_id, city",
        )
        .bind(tg_user_id)
        .bind(city)
        .fetch_one(&mut *conn)
        .await?;

        log::info!("Stored city for user {}", tg_user_id);
        Ok(user.into())
    }
}
