use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::admins::dtos::{
    AdministratorResponseDto, CreateAdministratorDto, UpdateAdministratorDto,
};
use crate::features::admins::models::Administrator;

const ADMIN_COLUMNS: &str = "id, name, credential, salt, password_hash, created_at";

/// Derive the stored password hash from a salt and a plaintext password
fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

fn generate_salt() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Compare a presented password against a stored salt and hash
fn password_matches(salt: &str, password_hash: &str, password: &str) -> bool {
    hash_password(salt, password) == password_hash
}

/// Maps a unique-index violation on the administrator name to a conflict
fn map_insert_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            AppError::Conflict("Administrator name already exists".to_string())
        }
        other => {
            tracing::error!("Administrator write failed: {:?}", other);
            AppError::Database(other)
        }
    }
}

/// Service for administrator management and credential checks.
///
/// Name uniqueness is enforced by the `administrators_name_key` unique
/// index rather than an application-level scan.
pub struct AdminService {
    pool: PgPool,
}

impl AdminService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, dto: CreateAdministratorDto) -> Result<AdministratorResponseDto> {
        let salt = generate_salt();
        let password_hash = hash_password(&salt, &dto.password);

        let admin = sqlx::query_as::<_, Administrator>(&format!(
            r#"
            INSERT INTO administrators (name, credential, salt, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING {ADMIN_COLUMNS}
            "#
        ))
        .bind(&dto.name)
        .bind(&dto.credential)
        .bind(&salt)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        tracing::info!("Administrator created: id={}, name={}", admin.id, admin.name);

        Ok(admin.into())
    }

    pub async fn update(&self, dto: UpdateAdministratorDto) -> Result<AdministratorResponseDto> {
        let admin = match dto.password {
            Some(ref password) => {
                let salt = generate_salt();
                let password_hash = hash_password(&salt, password);
                sqlx::query_as::<_, Administrator>(&format!(
                    r#"
                    UPDATE administrators
                    SET name = $2, credential = $3, salt = $4, password_hash = $5
                    WHERE id = $1
                    RETURNING {ADMIN_COLUMNS}
                    "#
                ))
                .bind(dto.id)
                .bind(&dto.name)
                .bind(&dto.credential)
                .bind(&salt)
                .bind(&password_hash)
                .fetch_optional(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Administrator>(&format!(
                    r#"
                    UPDATE administrators
                    SET name = $2, credential = $3
                    WHERE id = $1
                    RETURNING {ADMIN_COLUMNS}
                    "#
                ))
                .bind(dto.id)
                .bind(&dto.name)
                .bind(&dto.credential)
                .fetch_optional(&self.pool)
                .await
            }
        }
        .map_err(map_insert_error)?;

        admin
            .map(|a| a.into())
            .ok_or_else(|| AppError::NotFound(format!("Administrator {} not found", dto.id)))
    }

    pub async fn remove(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM administrators WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete administrator: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(())
    }

    pub async fn get(&self, id: i32) -> Result<Option<AdministratorResponseDto>> {
        let admin = sqlx::query_as::<_, Administrator>(&format!(
            "SELECT {ADMIN_COLUMNS} FROM administrators WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to find administrator by id: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(admin.map(|a| a.into()))
    }

    pub async fn list(&self) -> Result<Vec<AdministratorResponseDto>> {
        let admins = sqlx::query_as::<_, Administrator>(&format!(
            "SELECT {ADMIN_COLUMNS} FROM administrators ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list administrators: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(admins.into_iter().map(|a| a.into()).collect())
    }

    /// Validate administrator credentials against the stored salted hash.
    /// Returns false both for an unknown credential and a wrong password.
    pub async fn validate_credentials(&self, credential: &str, password: &str) -> Result<bool> {
        let admin = sqlx::query_as::<_, Administrator>(&format!(
            "SELECT {ADMIN_COLUMNS} FROM administrators WHERE credential = $1"
        ))
        .bind(credential)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up administrator credential: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(match admin {
            Some(admin) => password_matches(&admin.salt, &admin.password_hash, password),
            None => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic_for_same_salt() {
        let hash1 = hash_password("salt-a", "correct horse");
        let hash2 = hash_password("salt-a", "correct horse");
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_hash_differs_for_different_salt_or_password() {
        let base = hash_password("salt-a", "correct horse");
        assert_ne!(base, hash_password("salt-b", "correct horse"));
        assert_ne!(base, hash_password("salt-a", "battery staple"));
    }

    #[test]
    fn test_hash_is_hex_sha256() {
        let hash = hash_password("salt", "password");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generated_salts_are_unique() {
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn test_login_check_accepts_correct_password() {
        let salt = generate_salt();
        let stored = hash_password(&salt, "correct horse");
        assert!(password_matches(&salt, &stored, "correct horse"));
    }

    #[test]
    fn test_login_check_rejects_wrong_password_and_foreign_salt() {
        let salt = generate_salt();
        let stored = hash_password(&salt, "correct horse");
        assert!(!password_matches(&salt, &stored, "battery staple"));

        // The same password hashed under another account's salt must not pass
        let other_salt = generate_salt();
        assert!(!password_matches(&other_salt, &stored, "correct horse"));
    }
}
