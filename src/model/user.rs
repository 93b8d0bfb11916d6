use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub full_name: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Login form, the user is created on first login
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            created_at: user.created_at,
        }
    }
}
