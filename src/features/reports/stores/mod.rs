mod pg_report_store;

pub use pg_report_store::PgReportStore;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::reporters::models::{NewReporter, Reporter};
use crate::features::reports::models::{Report, ReportDraft};

/// Keyed CRUD over report records, plus the two-table writes the workflow
/// depends on.
///
/// `insert_with_reporter` and `update_with_reporter` execute the reporter
/// write and the report write in a single transaction, so a failure in the
/// second write never leaves an orphaned reporter or a half-applied update.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Upserts the reporter (keyed by email), re-reads it to obtain the
    /// assigned id, then inserts the report referencing that id.
    async fn insert_with_reporter(
        &self,
        reporter: NewReporter,
        draft: ReportDraft,
    ) -> Result<(Reporter, Report)>;

    /// Overwrites the reporter's contact fields and the report's fields,
    /// keyed by the report's own id.
    async fn update_with_reporter(
        &self,
        reporter: &Reporter,
        report_id: i32,
        draft: &ReportDraft,
    ) -> Result<Report>;

    async fn delete(&self, id: i32) -> Result<()>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Report>>;
    async fn list_all(&self) -> Result<Vec<Report>>;
}
