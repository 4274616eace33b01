use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::admins::dtos::AdministratorResponseDto;

/// Database model for an administrator.
///
/// Passwords are stored as a per-record salt plus a salted SHA-256 hash;
/// the plaintext never touches the database.
#[derive(Debug, Clone, FromRow)]
pub struct Administrator {
    pub id: i32,
    pub name: String,
    pub credential: String,
    pub salt: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<Administrator> for AdministratorResponseDto {
    fn from(a: Administrator) -> Self {
        Self {
            id: a.id,
            name: a.name,
            credential: a.credential,
            created_at: a.created_at,
        }
    }
}
