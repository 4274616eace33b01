use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request DTO for submitting a report.
///
/// Carries the reporter's contact fields inline: the workflow materializes
/// (or refreshes) the reporter record as part of the submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportDto {
    #[validate(length(min = 1, max = 255, message = "Full name must be 1-255 characters"))]
    pub full_name: String,

    #[validate(length(min = 1, max = 255, message = "Email must be 1-255 characters"))]
    pub email: String,

    #[validate(length(min = 1, max = 32, message = "National id must be 1-32 characters"))]
    pub national_id: String,

    #[validate(length(min = 1, max = 16, message = "Postal code must be 1-16 characters"))]
    pub postal_code: String,

    #[validate(length(min = 1, max = 64, message = "Category must be 1-64 characters"))]
    pub category: String,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: String,

    // Coordinate ranges are not validated here
    pub latitude: f64,
    pub longitude: f64,

    pub occurred_at: DateTime<Utc>,

    /// Reference (e.g. URL) to an associated media asset; may be empty
    #[serde(default)]
    pub media_ref: String,
}

/// Request DTO for updating a report through the workflow
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReportDto {
    pub id: i32,
    pub reporter_id: i32,

    #[validate(length(min = 1, max = 255, message = "Full name must be 1-255 characters"))]
    pub full_name: String,

    #[validate(length(min = 1, max = 255, message = "Email must be 1-255 characters"))]
    pub email: String,

    #[validate(length(min = 1, max = 32, message = "National id must be 1-32 characters"))]
    pub national_id: String,

    #[validate(length(min = 1, max = 16, message = "Postal code must be 1-16 characters"))]
    pub postal_code: String,

    #[validate(length(min = 1, max = 64, message = "Category must be 1-64 characters"))]
    pub category: String,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: String,

    pub latitude: f64,
    pub longitude: f64,

    pub occurred_at: DateTime<Utc>,

    #[serde(default)]
    pub media_ref: String,
}

/// Response DTO for a report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponseDto {
    pub id: i32,
    pub reporter_id: i32,
    pub category: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub occurred_at: DateTime<Utc>,
    pub media_ref: String,
    pub created_at: DateTime<Utc>,
}
