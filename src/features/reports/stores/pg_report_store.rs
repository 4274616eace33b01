use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::reporters::models::{NewReporter, Reporter};
use crate::features::reports::models::{Report, ReportDraft};
use crate::features::reports::stores::ReportStore;

const REPORT_COLUMNS: &str =
    "id, reporter_id, category, description, latitude, longitude, occurred_at, media_ref, created_at";

/// Postgres-backed report store
pub struct PgReportStore {
    pool: PgPool,
}

impl PgReportStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn insert_with_reporter(
        &self,
        reporter: NewReporter,
        draft: ReportDraft,
    ) -> Result<(Reporter, Report)> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin submission transaction: {:?}", e);
            AppError::Database(e)
        })?;

        sqlx::query(
            r#"
            INSERT INTO reporters (full_name, email, national_id, postal_code)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                national_id = EXCLUDED.national_id,
                postal_code = EXCLUDED.postal_code
            "#,
        )
        .bind(&reporter.full_name)
        .bind(&reporter.email)
        .bind(&reporter.national_id)
        .bind(&reporter.postal_code)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert reporter: {:?}", e);
            AppError::Database(e)
        })?;

        // Re-read by email for the assigned id; an absent row here means the
        // insert did not take effect.
        let stored = sqlx::query_as::<_, Reporter>(
            "SELECT id, full_name, email, national_id, postal_code, created_at \
             FROM reporters WHERE email = $1",
        )
        .bind(&reporter.email)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to re-read reporter after insert: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| {
            AppError::Persistence(format!(
                "reporter row missing after insert for email {}",
                reporter.email
            ))
        })?;

        let report = sqlx::query_as::<_, Report>(&format!(
            r#"
            INSERT INTO reports
                (reporter_id, category, description, latitude, longitude, occurred_at, media_ref)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {REPORT_COLUMNS}
            "#
        ))
        .bind(stored.id)
        .bind(&draft.category)
        .bind(&draft.description)
        .bind(draft.latitude)
        .bind(draft.longitude)
        .bind(draft.occurred_at)
        .bind(&draft.media_ref)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert report: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit submission transaction: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((stored, report))
    }

    async fn update_with_reporter(
        &self,
        reporter: &Reporter,
        report_id: i32,
        draft: &ReportDraft,
    ) -> Result<Report> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin update transaction: {:?}", e);
            AppError::Database(e)
        })?;

        sqlx::query(
            r#"
            UPDATE reporters
            SET full_name = $2, email = $3, national_id = $4, postal_code = $5
            WHERE id = $1
            "#,
        )
        .bind(reporter.id)
        .bind(&reporter.full_name)
        .bind(&reporter.email)
        .bind(&reporter.national_id)
        .bind(&reporter.postal_code)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update reporter: {:?}", e);
            AppError::Database(e)
        })?;

        let report = sqlx::query_as::<_, Report>(&format!(
            r#"
            UPDATE reports
            SET reporter_id = $2, category = $3, description = $4,
                latitude = $5, longitude = $6, occurred_at = $7, media_ref = $8
            WHERE id = $1
            RETURNING {REPORT_COLUMNS}
            "#
        ))
        .bind(report_id)
        .bind(reporter.id)
        .bind(&draft.category)
        .bind(&draft.description)
        .bind(draft.latitude)
        .bind(draft.longitude)
        .bind(draft.occurred_at)
        .bind(&draft.media_ref)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update report: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Report {} not found", report_id)))?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit update transaction: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(report)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete report: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Report>> {
        let report = sqlx::query_as::<_, Report>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to find report by id: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(report)
    }

    async fn list_all(&self) -> Result<Vec<Report>> {
        let reports = sqlx::query_as::<_, Report>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reports: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(reports)
    }
}
