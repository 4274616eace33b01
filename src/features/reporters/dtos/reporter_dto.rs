use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request DTO for creating a reporter through the direct CRUD surface
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReporterDto {
    #[validate(length(min = 1, max = 255, message = "Full name must be 1-255 characters"))]
    pub full_name: String,

    #[validate(length(min = 1, max = 255, message = "Email must be 1-255 characters"))]
    pub email: String,

    #[validate(length(min = 1, max = 32, message = "National id must be 1-32 characters"))]
    pub national_id: String,

    #[validate(length(min = 1, max = 16, message = "Postal code must be 1-16 characters"))]
    pub postal_code: String,
}

/// Request DTO for updating a reporter
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReporterDto {
    pub id: i32,

    #[validate(length(min = 1, max = 255, message = "Full name must be 1-255 characters"))]
    pub full_name: String,

    #[validate(length(min = 1, max = 255, message = "Email must be 1-255 characters"))]
    pub email: String,

    #[validate(length(min = 1, max = 32, message = "National id must be 1-32 characters"))]
    pub national_id: String,

    #[validate(length(min = 1, max = 16, message = "Postal code must be 1-16 characters"))]
    pub postal_code: String,
}

/// Response DTO for a reporter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporterResponseDto {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub national_id: String,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
}
