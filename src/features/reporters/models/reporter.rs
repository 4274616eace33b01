use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::reporters::dtos::ReporterResponseDto;

/// Database model for a reporter identity
#[derive(Debug, Clone, FromRow)]
pub struct Reporter {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub national_id: String,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a reporter (id is assigned by the store)
#[derive(Debug, Clone)]
pub struct NewReporter {
    pub full_name: String,
    pub email: String,
    pub national_id: String,
    pub postal_code: String,
}

impl From<Reporter> for ReporterResponseDto {
    fn from(r: Reporter) -> Self {
        Self {
            id: r.id,
            full_name: r.full_name,
            email: r.email,
            national_id: r.national_id,
            postal_code: r.postal_code,
            created_at: r.created_at,
        }
    }
}
