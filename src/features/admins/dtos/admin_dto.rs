use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request DTO for creating an administrator
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdministratorDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Credential must be 1-255 characters"))]
    pub credential: String,

    #[validate(length(min = 8, max = 255, message = "Password must be 8-255 characters"))]
    pub password: String,
}

/// Request DTO for updating an administrator; password is re-hashed only
/// when a new one is supplied
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdministratorDto {
    pub id: i32,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Credential must be 1-255 characters"))]
    pub credential: String,

    #[validate(length(min = 8, max = 255, message = "Password must be 8-255 characters"))]
    pub password: Option<String>,
}

/// Request DTO for administrator login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub credential: String,
    pub password: String,
}

/// Response DTO for an administrator; never carries password material
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministratorResponseDto {
    pub id: i32,
    pub name: String,
    pub credential: String,
    pub created_at: DateTime<Utc>,
}
