use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::lookup::clients::{EmailVerifier, PostalCodeLookup};
use crate::features::reporters::models::{NewReporter, Reporter};
use crate::features::reporters::stores::ReporterStore;
use crate::features::reports::dtos::{ReportResponseDto, SubmitReportDto, UpdateReportDto};
use crate::features::reports::models::{ReportCategory, ReportDraft};
use crate::features::reports::stores::ReportStore;
use crate::shared::validation::EMAIL_REGEX;

/// Orchestrates report submission and update.
///
/// Every write goes through here: category membership is checked first, both
/// external validators must pass before anything touches the store, and the
/// reporter + report writes run as a single transactional unit. Steps are
/// sequential and a failure aborts the rest; nothing is retried.
pub struct ReportWorkflow {
    reports: Arc<dyn ReportStore>,
    reporters: Arc<dyn ReporterStore>,
    email_verifier: Arc<dyn EmailVerifier>,
    postal_lookup: Arc<dyn PostalCodeLookup>,
}

impl ReportWorkflow {
    pub fn new(
        reports: Arc<dyn ReportStore>,
        reporters: Arc<dyn ReporterStore>,
        email_verifier: Arc<dyn EmailVerifier>,
        postal_lookup: Arc<dyn PostalCodeLookup>,
    ) -> Self {
        Self {
            reports,
            reporters,
            email_verifier,
            postal_lookup,
        }
    }

    /// Validates the reporter's contact fields against both external
    /// services. No write happens until this has passed in full.
    async fn validate_contact(&self, email: &str, postal_code: &str) -> Result<()> {
        if !EMAIL_REGEX.is_match(email) {
            return Err(AppError::InvalidEmail(format!(
                "malformed address: {}",
                email
            )));
        }

        let verdict = self.email_verifier.verify(email).await?;
        if !verdict.valid {
            let reason = verdict
                .error_message
                .unwrap_or_else(|| format!("address rejected by verifier: {}", email));
            return Err(AppError::InvalidEmail(reason));
        }

        if self.postal_lookup.resolve(postal_code).await?.is_none() {
            return Err(AppError::InvalidPostalCode(postal_code.to_string()));
        }

        Ok(())
    }

    /// Submit a new report.
    ///
    /// Validates category and contact fields, then inserts the reporter
    /// (upsert by email) and the report in one transaction. Returns the
    /// persisted report carrying both assigned ids.
    pub async fn submit(&self, dto: SubmitReportDto) -> Result<ReportResponseDto> {
        let category = ReportCategory::parse(&dto.category)
            .ok_or_else(|| AppError::InvalidCategory(dto.category.clone()))?;

        self.validate_contact(&dto.email, &dto.postal_code).await?;

        let reporter = NewReporter {
            full_name: dto.full_name,
            email: dto.email,
            national_id: dto.national_id,
            postal_code: dto.postal_code,
        };
        let draft = ReportDraft {
            category: category.as_str().to_string(),
            description: dto.description,
            latitude: dto.latitude,
            longitude: dto.longitude,
            occurred_at: dto.occurred_at,
            media_ref: dto.media_ref,
        };

        let (reporter, report) = self.reports.insert_with_reporter(reporter, draft).await?;

        tracing::info!(
            "Report submitted: id={}, reporter_id={}, category={}",
            report.id,
            reporter.id,
            report.category
        );

        Ok(report.into())
    }

    /// Update an existing report.
    ///
    /// Re-validates the category and the (possibly changed) contact fields,
    /// then overwrites the reporter's contact fields and the report in one
    /// transaction. The report keeps its own id.
    pub async fn update(&self, dto: UpdateReportDto) -> Result<ReportResponseDto> {
        let category = ReportCategory::parse(&dto.category)
            .ok_or_else(|| AppError::InvalidCategory(dto.category.clone()))?;

        let existing = self
            .reporters
            .find_by_id(dto.reporter_id)
            .await?
            .ok_or(AppError::ReporterNotFound(dto.reporter_id))?;

        self.validate_contact(&dto.email, &dto.postal_code).await?;

        let reporter = Reporter {
            id: existing.id,
            full_name: dto.full_name,
            email: dto.email,
            national_id: dto.national_id,
            postal_code: dto.postal_code,
            created_at: existing.created_at,
        };
        let draft = ReportDraft {
            category: category.as_str().to_string(),
            description: dto.description,
            latitude: dto.latitude,
            longitude: dto.longitude,
            occurred_at: dto.occurred_at,
            media_ref: dto.media_ref,
        };

        let report = self
            .reports
            .update_with_reporter(&reporter, dto.id, &draft)
            .await?;

        tracing::info!(
            "Report updated: id={}, reporter_id={}",
            report.id,
            report.reporter_id
        );

        Ok(report.into())
    }

    /// Hard delete, no cascade validation
    pub async fn remove(&self, id: i32) -> Result<()> {
        self.reports.delete(id).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<ReportResponseDto>> {
        Ok(self.reports.find_by_id(id).await?.map(|r| r.into()))
    }

    pub async fn list(&self) -> Result<Vec<ReportResponseDto>> {
        let reports = self.reports.list_all().await?;
        Ok(reports.into_iter().map(|r| r.into()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        InMemoryReportStore, InMemoryReporterStore, StubEmailVerifier, StubPostalLookup,
    };
    use chrono::Utc;

    struct Fixture {
        workflow: ReportWorkflow,
        reports: Arc<InMemoryReportStore>,
        reporters: Arc<InMemoryReporterStore>,
    }

    fn fixture(verifier: StubEmailVerifier, lookup: StubPostalLookup) -> Fixture {
        let reporters = Arc::new(InMemoryReporterStore::new());
        let reports = Arc::new(InMemoryReportStore::new(Arc::clone(&reporters)));
        let workflow = ReportWorkflow::new(
            Arc::clone(&reports) as Arc<dyn ReportStore>,
            Arc::clone(&reporters) as Arc<dyn ReporterStore>,
            Arc::new(verifier),
            Arc::new(lookup),
        );
        Fixture {
            workflow,
            reports,
            reporters,
        }
    }

    fn submit_dto(category: &str) -> SubmitReportDto {
        SubmitReportDto {
            full_name: "Ana Souza".to_string(),
            email: "a@b.com".to_string(),
            national_id: "12345678900".to_string(),
            postal_code: "01001000".to_string(),
            category: category.to_string(),
            description: "Mancha de óleo na praia".to_string(),
            latitude: -23.96,
            longitude: -46.33,
            occurred_at: Utc::now(),
            media_ref: String::new(),
        }
    }

    #[tokio::test]
    async fn submit_assigns_ids_and_links_reporter() {
        let f = fixture(StubEmailVerifier::valid(), StubPostalLookup::found());

        let report = f.workflow.submit(submit_dto("Incidente")).await.unwrap();

        assert!(report.id > 0);
        assert!(report.reporter_id > 0);
        assert_eq!(report.category, "incidente");

        let stored = f.workflow.get(report.id).await.unwrap().unwrap();
        assert_eq!(stored.reporter_id, report.reporter_id);
        assert_eq!(stored.description, "Mancha de óleo na praia");

        let reporter = f
            .reporters
            .find_by_id(report.reporter_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reporter.email, "a@b.com");
    }

    #[tokio::test]
    async fn submit_invalid_category_writes_nothing() {
        let f = fixture(StubEmailVerifier::valid(), StubPostalLookup::found());

        let err = f.workflow.submit(submit_dto("invalid-type")).await.unwrap_err();

        assert!(matches!(err, AppError::InvalidCategory(_)));
        assert!(f.reports.list_all().await.unwrap().is_empty());
        assert!(f.reporters.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_negative_email_verdict_writes_nothing() {
        let f = fixture(
            StubEmailVerifier::invalid("mailbox does not exist"),
            StubPostalLookup::found(),
        );

        let mut dto = submit_dto("acidente");
        dto.email = "bad@bad.com".to_string();
        let err = f.workflow.submit(dto).await.unwrap_err();

        assert!(matches!(err, AppError::InvalidEmail(_)));
        assert!(f.reports.list_all().await.unwrap().is_empty());
        assert!(f.reporters.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_unresolved_postal_code_writes_nothing() {
        let f = fixture(StubEmailVerifier::valid(), StubPostalLookup::not_found());

        let mut dto = submit_dto("vida marinha");
        dto.postal_code = "00000000".to_string();
        let err = f.workflow.submit(dto).await.unwrap_err();

        match err {
            AppError::InvalidPostalCode(code) => assert_eq!(code, "00000000"),
            other => panic!("expected InvalidPostalCode, got {:?}", other),
        }
        assert!(f.reports.list_all().await.unwrap().is_empty());
        assert!(f.reporters.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_verifier_transport_failure_is_external_error() {
        let f = fixture(StubEmailVerifier::failing(), StubPostalLookup::found());

        let err = f.workflow.submit(submit_dto("incidente")).await.unwrap_err();

        assert!(matches!(err, AppError::ExternalService(_)));
        assert!(f.reports.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_reuses_reporter_with_same_email() {
        let f = fixture(StubEmailVerifier::valid(), StubPostalLookup::found());

        let first = f.workflow.submit(submit_dto("incidente")).await.unwrap();

        let mut second_dto = submit_dto("acidente");
        second_dto.full_name = "Ana S. Souza".to_string();
        let second = f.workflow.submit(second_dto).await.unwrap();

        assert_eq!(first.reporter_id, second.reporter_id);
        assert_eq!(f.reporters.list_all().await.unwrap().len(), 1);
        assert_eq!(
            f.reporters
                .find_by_id(first.reporter_id)
                .await
                .unwrap()
                .unwrap()
                .full_name,
            "Ana S. Souza"
        );
    }

    #[tokio::test]
    async fn update_revalidates_and_overwrites_both_records() {
        let f = fixture(StubEmailVerifier::valid(), StubPostalLookup::found());
        let submitted = f.workflow.submit(submit_dto("incidente")).await.unwrap();

        let updated = f
            .workflow
            .update(UpdateReportDto {
                id: submitted.id,
                reporter_id: submitted.reporter_id,
                full_name: "Ana Souza".to_string(),
                email: "novo@b.com".to_string(),
                national_id: "12345678900".to_string(),
                postal_code: "01310100".to_string(),
                category: "Vida Marinha".to_string(),
                description: "Tartaruga encalhada".to_string(),
                latitude: -23.98,
                longitude: -46.30,
                occurred_at: Utc::now(),
                media_ref: "https://cdn.example/turtle.jpg".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, submitted.id);
        assert_eq!(updated.category, "vida marinha");

        let reporter = f
            .reporters
            .find_by_id(submitted.reporter_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reporter.email, "novo@b.com");
        assert_eq!(reporter.postal_code, "01310100");
    }

    #[tokio::test]
    async fn update_unknown_reporter_leaves_report_unchanged() {
        let f = fixture(StubEmailVerifier::valid(), StubPostalLookup::found());
        let submitted = f.workflow.submit(submit_dto("incidente")).await.unwrap();

        let err = f
            .workflow
            .update(UpdateReportDto {
                id: submitted.id,
                reporter_id: 9999,
                full_name: "Ana Souza".to_string(),
                email: "a@b.com".to_string(),
                national_id: "12345678900".to_string(),
                postal_code: "01001000".to_string(),
                category: "acidente".to_string(),
                description: "tentativa".to_string(),
                latitude: 0.0,
                longitude: 0.0,
                occurred_at: Utc::now(),
                media_ref: String::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ReporterNotFound(9999)));

        let unchanged = f.workflow.get(submitted.id).await.unwrap().unwrap();
        assert_eq!(unchanged.category, "incidente");
        assert_eq!(unchanged.description, "Mancha de óleo na praia");
    }

    #[tokio::test]
    async fn update_postal_failure_applies_no_partial_reporter_overwrite() {
        // Seed through a working lookup, then run the update against a
        // workflow whose lookup reports not-found over the same stores.
        let seeded = fixture(StubEmailVerifier::valid(), StubPostalLookup::found());
        seeded.workflow.submit(submit_dto("incidente")).await.unwrap();
        let submitted = seeded.reports.list_all().await.unwrap().remove(0);

        let failing = ReportWorkflow::new(
            Arc::clone(&seeded.reports) as Arc<dyn ReportStore>,
            Arc::clone(&seeded.reporters) as Arc<dyn ReporterStore>,
            Arc::new(StubEmailVerifier::valid()),
            Arc::new(StubPostalLookup::not_found()),
        );

        let err = failing
            .update(UpdateReportDto {
                id: submitted.id,
                reporter_id: submitted.reporter_id,
                full_name: "Outro Nome".to_string(),
                email: "outro@b.com".to_string(),
                national_id: "00011122233".to_string(),
                postal_code: "00000000".to_string(),
                category: "vida marinha".to_string(),
                description: "nova descrição".to_string(),
                latitude: 1.0,
                longitude: 1.0,
                occurred_at: Utc::now(),
                media_ref: String::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidPostalCode(_)));

        // Neither record was touched
        let reporter = seeded
            .reporters
            .find_by_id(submitted.reporter_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reporter.email, "a@b.com");
        let report = seeded
            .reports
            .find_by_id(submitted.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(report.category, "incidente");
    }
}
