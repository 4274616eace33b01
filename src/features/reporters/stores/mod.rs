mod pg_reporter_store;

pub use pg_reporter_store::PgReporterStore;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::reporters::models::{NewReporter, Reporter};

/// Keyed CRUD over reporter identity records.
///
/// `insert` is an upsert keyed by email: a submission reusing a known email
/// refreshes that reporter's contact fields instead of creating a duplicate.
/// Absent rows on pure lookups are `None`, not errors.
#[async_trait]
pub trait ReporterStore: Send + Sync {
    async fn insert(&self, data: NewReporter) -> Result<Reporter>;
    async fn update(&self, reporter: &Reporter) -> Result<Reporter>;
    async fn delete(&self, id: i32) -> Result<()>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Reporter>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Reporter>>;
    async fn list_all(&self) -> Result<Vec<Reporter>>;
}
