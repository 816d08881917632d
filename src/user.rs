pub type UserId = i64;

/// Telegram user id as persisted. Telegram hands out `u64`, SQLite stores `i64`.
pub type TgUserId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub tg_user_id: TgUserId,
    pub city: Option<String>,
}

impl User {
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|city| !city.is_empty())
    }
}
