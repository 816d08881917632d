use crate::user::User;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserStorageModel {
    pub id: i64,
    pub tg_user_id: i64,
    pub city: Option<String>,
}

impl From<UserStorageModel> for User {
    fn from(value: UserStorageModel) -> Self {
        Self {
            id: value.id,
            tg_user_id: value.tg_user_id,
            city: value.city,
        }
    }
}
