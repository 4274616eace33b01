//! In-memory fakes for the store and lookup traits, shared across test
//! modules. Everything here is `#[cfg(test)]`-gated.

#[cfg(test)]
use std::sync::{
    atomic::{AtomicI32, Ordering},
    Arc, Mutex,
};

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use chrono::Utc;

#[cfg(test)]
use crate::core::error::{AppError, Result};
#[cfg(test)]
use crate::features::lookup::clients::{Address, EmailVerdict, EmailVerifier, PostalCodeLookup};
#[cfg(test)]
use crate::features::reporters::models::{NewReporter, Reporter};
#[cfg(test)]
use crate::features::reporters::stores::ReporterStore;
#[cfg(test)]
use crate::features::reports::models::{Report, ReportDraft};
#[cfg(test)]
use crate::features::reports::stores::ReportStore;

/// Reporter store backed by a vector; upserts by email like the Postgres one
#[cfg(test)]
pub struct InMemoryReporterStore {
    rows: Mutex<Vec<Reporter>>,
    next_id: AtomicI32,
}

#[cfg(test)]
impl InMemoryReporterStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl ReporterStore for InMemoryReporterStore {
    async fn insert(&self, data: NewReporter) -> Result<Reporter> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows.iter_mut().find(|r| r.email == data.email) {
            existing.full_name = data.full_name;
            existing.national_id = data.national_id;
            existing.postal_code = data.postal_code;
            return Ok(existing.clone());
        }
        let reporter = Reporter {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            full_name: data.full_name,
            email: data.email,
            national_id: data.national_id,
            postal_code: data.postal_code,
            created_at: Utc::now(),
        };
        rows.push(reporter.clone());
        Ok(reporter)
    }

    async fn update(&self, reporter: &Reporter) -> Result<Reporter> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id == reporter.id) {
            Some(row) => {
                *row = reporter.clone();
                Ok(row.clone())
            }
            None => Err(AppError::NotFound(format!(
                "Reporter {} not found",
                reporter.id
            ))),
        }
    }

    async fn delete(&self, id: i32) -> Result<()> {
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Reporter>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Reporter>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.email == email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Reporter>> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

/// Report store backed by a vector, delegating reporter writes to an
/// [`InMemoryReporterStore`] the way the Postgres store shares tables
#[cfg(test)]
pub struct InMemoryReportStore {
    rows: Mutex<Vec<Report>>,
    next_id: AtomicI32,
    reporters: Arc<InMemoryReporterStore>,
}

#[cfg(test)]
impl InMemoryReportStore {
    pub fn new(reporters: Arc<InMemoryReporterStore>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
            reporters,
        }
    }
}

#[cfg(test)]
#[async_trait]
impl ReportStore for InMemoryReportStore {
    async fn insert_with_reporter(
        &self,
        reporter: NewReporter,
        draft: ReportDraft,
    ) -> Result<(Reporter, Report)> {
        let email = reporter.email.clone();
        self.reporters.insert(reporter).await?;
        let stored = self
            .reporters
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                AppError::Persistence(format!("reporter row missing after insert for email {}", email))
            })?;

        let report = Report {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            reporter_id: stored.id,
            category: draft.category,
            description: draft.description,
            latitude: draft.latitude,
            longitude: draft.longitude,
            occurred_at: draft.occurred_at,
            media_ref: draft.media_ref,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(report.clone());
        Ok((stored, report))
    }

    async fn update_with_reporter(
        &self,
        reporter: &Reporter,
        report_id: i32,
        draft: &ReportDraft,
    ) -> Result<Report> {
        self.reporters.update(reporter).await?;

        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id == report_id) {
            Some(row) => {
                row.reporter_id = reporter.id;
                row.category = draft.category.clone();
                row.description = draft.description.clone();
                row.latitude = draft.latitude;
                row.longitude = draft.longitude;
                row.occurred_at = draft.occurred_at;
                row.media_ref = draft.media_ref.clone();
                Ok(row.clone())
            }
            None => Err(AppError::NotFound(format!(
                "Report {} not found",
                report_id
            ))),
        }
    }

    async fn delete(&self, id: i32) -> Result<()> {
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Report>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Report>> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

/// Canned email verifier
#[cfg(test)]
pub struct StubEmailVerifier {
    fail: bool,
    valid: bool,
    message: Option<String>,
}

#[cfg(test)]
impl StubEmailVerifier {
    pub fn valid() -> Self {
        Self {
            fail: false,
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: &str) -> Self {
        Self {
            fail: false,
            valid: false,
            message: Some(message.to_string()),
        }
    }

    /// Simulates a transport failure
    pub fn failing() -> Self {
        Self {
            fail: true,
            valid: false,
            message: None,
        }
    }
}

#[cfg(test)]
#[async_trait]
impl EmailVerifier for StubEmailVerifier {
    async fn verify(&self, _email: &str) -> Result<EmailVerdict> {
        if self.fail {
            return Err(AppError::ExternalService(
                "email verifier unreachable".to_string(),
            ));
        }
        Ok(EmailVerdict {
            valid: self.valid,
            error_message: self.message.clone(),
        })
    }
}

/// Canned postal code lookup
#[cfg(test)]
pub struct StubPostalLookup {
    fail: bool,
    found: bool,
}

#[cfg(test)]
impl StubPostalLookup {
    pub fn found() -> Self {
        Self {
            fail: false,
            found: true,
        }
    }

    pub fn not_found() -> Self {
        Self {
            fail: false,
            found: false,
        }
    }

    /// Simulates a transport failure
    pub fn failing() -> Self {
        Self {
            fail: true,
            found: false,
        }
    }
}

#[cfg(test)]
#[async_trait]
impl PostalCodeLookup for StubPostalLookup {
    async fn resolve(&self, postal_code: &str) -> Result<Option<Address>> {
        if self.fail {
            return Err(AppError::ExternalService(
                "postal lookup unreachable".to_string(),
            ));
        }
        if !self.found {
            return Ok(None);
        }
        Ok(Some(Address {
            cep: Some(postal_code.to_string()),
            logradouro: Some("Praça da Sé".to_string()),
            complemento: None,
            bairro: Some("Sé".to_string()),
            localidade: Some("São Paulo".to_string()),
            uf: Some("SP".to_string()),
        }))
    }
}
