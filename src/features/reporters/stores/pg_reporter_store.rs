use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::reporters::models::{NewReporter, Reporter};
use crate::features::reporters::stores::ReporterStore;

const REPORTER_COLUMNS: &str = "id, full_name, email, national_id, postal_code, created_at";

/// Postgres-backed reporter store
pub struct PgReporterStore {
    pool: PgPool,
}

impl PgReporterStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReporterStore for PgReporterStore {
    async fn insert(&self, data: NewReporter) -> Result<Reporter> {
        let reporter = sqlx::query_as::<_, Reporter>(&format!(
            r#"
            INSERT INTO reporters (full_name, email, national_id, postal_code)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                national_id = EXCLUDED.national_id,
                postal_code = EXCLUDED.postal_code
            RETURNING {REPORTER_COLUMNS}
            "#
        ))
        .bind(&data.full_name)
        .bind(&data.email)
        .bind(&data.national_id)
        .bind(&data.postal_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert reporter: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Reporter stored: id={}, email={}",
            reporter.id,
            reporter.email
        );

        Ok(reporter)
    }

    async fn update(&self, reporter: &Reporter) -> Result<Reporter> {
        let updated = sqlx::query_as::<_, Reporter>(&format!(
            r#"
            UPDATE reporters
            SET full_name = $2, email = $3, national_id = $4, postal_code = $5
            WHERE id = $1
            RETURNING {REPORTER_COLUMNS}
            "#
        ))
        .bind(reporter.id)
        .bind(&reporter.full_name)
        .bind(&reporter.email)
        .bind(&reporter.national_id)
        .bind(&reporter.postal_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update reporter: {:?}", e);
            AppError::Database(e)
        })?;

        updated.ok_or_else(|| AppError::NotFound(format!("Reporter {} not found", reporter.id)))
    }

    async fn delete(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM reporters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete reporter: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Reporter>> {
        let reporter = sqlx::query_as::<_, Reporter>(&format!(
            "SELECT {REPORTER_COLUMNS} FROM reporters WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to find reporter by id: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(reporter)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Reporter>> {
        let reporter = sqlx::query_as::<_, Reporter>(&format!(
            "SELECT {REPORTER_COLUMNS} FROM reporters WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to find reporter by email: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(reporter)
    }

    async fn list_all(&self) -> Result<Vec<Reporter>> {
        let reporters = sqlx::query_as::<_, Reporter>(&format!(
            "SELECT {REPORTER_COLUMNS} FROM reporters ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reporters: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(reporters)
    }
}
