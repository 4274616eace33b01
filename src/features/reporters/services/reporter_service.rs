use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::lookup::clients::{EmailVerifier, PostalCodeLookup};
use crate::features::reporters::dtos::{
    CreateReporterDto, ReporterResponseDto, UpdateReporterDto,
};
use crate::features::reporters::models::{NewReporter, Reporter};
use crate::features::reporters::stores::ReporterStore;
use crate::shared::validation::EMAIL_REGEX;

/// Service for the direct reporter CRUD surface.
///
/// Create and update run the simpler, non-orchestrated validation path:
/// syntactic email check, deliverability verdict, postal code resolution,
/// then a single-table write.
pub struct ReporterService {
    store: Arc<dyn ReporterStore>,
    email_verifier: Arc<dyn EmailVerifier>,
    postal_lookup: Arc<dyn PostalCodeLookup>,
}

impl ReporterService {
    pub fn new(
        store: Arc<dyn ReporterStore>,
        email_verifier: Arc<dyn EmailVerifier>,
        postal_lookup: Arc<dyn PostalCodeLookup>,
    ) -> Self {
        Self {
            store,
            email_verifier,
            postal_lookup,
        }
    }

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

    pub async fn create(&self, dto: CreateReporterDto) -> Result<ReporterResponseDto> {
        self.validate_contact(&dto.email, &dto.postal_code).await?;

        let reporter = self
            .store
            .insert(NewReporter {
                full_name: dto.full_name,
                email: dto.email,
                national_id: dto.national_id,
                postal_code: dto.postal_code,
            })
            .await?;

        Ok(reporter.into())
    }

    pub async fn update(&self, dto: UpdateReporterDto) -> Result<ReporterResponseDto> {
        self.validate_contact(&dto.email, &dto.postal_code).await?;

        let existing = self
            .store
            .find_by_id(dto.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reporter {} not found", dto.id)))?;

        let reporter = Reporter {
            id: existing.id,
            full_name: dto.full_name,
            email: dto.email,
            national_id: dto.national_id,
            postal_code: dto.postal_code,
            created_at: existing.created_at,
        };

        let updated = self.store.update(&reporter).await?;
        Ok(updated.into())
    }

    pub async fn remove(&self, id: i32) -> Result<()> {
        self.store.delete(id).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<ReporterResponseDto>> {
        Ok(self.store.find_by_id(id).await?.map(|r| r.into()))
    }

    pub async fn list(&self) -> Result<Vec<ReporterResponseDto>> {
        let reporters = self.store.list_all().await?;
        Ok(reporters.into_iter().map(|r| r.into()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        InMemoryReporterStore, StubEmailVerifier, StubPostalLookup,
    };

    fn service(
        verifier: StubEmailVerifier,
        lookup: StubPostalLookup,
    ) -> (ReporterService, Arc<InMemoryReporterStore>) {
        let store = Arc::new(InMemoryReporterStore::new());
        let service = ReporterService::new(
            Arc::clone(&store) as Arc<dyn ReporterStore>,
            Arc::new(verifier),
            Arc::new(lookup),
        );
        (service, store)
    }

    fn create_dto() -> CreateReporterDto {
        CreateReporterDto {
            full_name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            national_id: "12345678900".to_string(),
            postal_code: "01001000".to_string(),
        }
    }

    #[tokio::test]
    async fn create_persists_validated_reporter() {
        let (service, store) = service(StubEmailVerifier::valid(), StubPostalLookup::found());

        let created = service.create(create_dto()).await.unwrap();

        assert!(created.id > 0);
        let stored = store.find_by_email("ana@example.com").await.unwrap();
        assert_eq!(stored.unwrap().full_name, "Ana Souza");
    }

    #[tokio::test]
    async fn create_rejects_malformed_email_without_calling_verifier() {
        let (service, store) = service(StubEmailVerifier::failing(), StubPostalLookup::found());

        let mut dto = create_dto();
        dto.email = "sem-arroba".to_string();

        let err = service.create(dto).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidEmail(_)));
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_negative_verdict() {
        let (service, store) = service(
            StubEmailVerifier::invalid("mailbox does not exist"),
            StubPostalLookup::found(),
        );

        let err = service.create(create_dto()).await.unwrap_err();
        match err {
            AppError::InvalidEmail(msg) => assert!(msg.contains("mailbox does not exist")),
            other => panic!("expected InvalidEmail, got {:?}", other),
        }
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_unresolved_postal_code() {
        let (service, store) = service(StubEmailVerifier::valid(), StubPostalLookup::not_found());

        let err = service.create(create_dto()).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidPostalCode(_)));
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_missing_reporter_is_not_found() {
        let (service, _store) = service(StubEmailVerifier::valid(), StubPostalLookup::found());

        let err = service
            .update(UpdateReporterDto {
                id: 99,
                full_name: "Ana Souza".to_string(),
                email: "ana@example.com".to_string(),
                national_id: "12345678900".to_string(),
                postal_code: "01001000".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
