use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::reports::dtos::ReportResponseDto;

/// Fixed classification set for citizen reports.
///
/// Input is matched case-insensitively; the stored form is the lowercase
/// label returned by [`ReportCategory::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportCategory {
    Incident,
    Accident,
    MarineLife,
}

impl ReportCategory {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "incidente" => Some(Self::Incident),
            "acidente" => Some(Self::Accident),
            "vida marinha" => Some(Self::MarineLife),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Incident => "incidente",
            Self::Accident => "acidente",
            Self::MarineLife => "vida marinha",
        }
    }
}

/// Database model for a citizen report
#[derive(Debug, Clone, FromRow)]
pub struct Report {
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

/// Report fields as validated by the workflow, before ids are attached.
///
/// `category` is already normalized to its stored form.
#[derive(Debug, Clone)]
pub struct ReportDraft {
    pub category: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub occurred_at: DateTime<Utc>,
    pub media_ref: String,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            reporter_id: r.reporter_id,
            category: r.category,
            description: r.description,
            latitude: r.latitude,
            longitude: r.longitude,
            occurred_at: r.occurred_at,
            media_ref: r.media_ref,
            created_at: r.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categories_case_insensitive() {
        assert_eq!(ReportCategory::parse("incidente"), Some(ReportCategory::Incident));
        assert_eq!(ReportCategory::parse("Incidente"), Some(ReportCategory::Incident));
        assert_eq!(ReportCategory::parse("ACIDENTE"), Some(ReportCategory::Accident));
        assert_eq!(
            ReportCategory::parse("VIDA MARINHA"),
            Some(ReportCategory::MarineLife)
        );
        assert_eq!(
            ReportCategory::parse("  vida marinha "),
            Some(ReportCategory::MarineLife)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_categories() {
        assert_eq!(ReportCategory::parse("invalid-type"), None);
        assert_eq!(ReportCategory::parse(""), None);
        assert_eq!(ReportCategory::parse("vida-marinha"), None);
    }

    #[test]
    fn test_normalized_form_is_lowercase() {
        assert_eq!(ReportCategory::parse("Incidente").unwrap().as_str(), "incidente");
        assert_eq!(
            ReportCategory::parse("Vida Marinha").unwrap().as_str(),
            "vida marinha"
        );
    }
}
