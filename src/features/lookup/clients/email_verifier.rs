use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::core::config::EmailVerifierConfig;
use crate::core::error::{AppError, Result};

/// Verdict returned by the deliverability verifier.
///
/// A negative verdict is a value, not an error: callers distinguish "the
/// service says this address is bad" from "we couldn't ask".
#[derive(Debug, Clone)]
pub struct EmailVerdict {
    pub valid: bool,
    pub error_message: Option<String>,
}

/// Asks an external service whether an email address is deliverable
#[async_trait]
pub trait EmailVerifier: Send + Sync {
    async fn verify(&self, email: &str) -> Result<EmailVerdict>;
}

/// Verifier API response structure
#[derive(Debug, Deserialize)]
struct VerifierResponse {
    status: bool,
    #[serde(default)]
    error: Option<VerifierError>,
}

#[derive(Debug, Deserialize)]
struct VerifierError {
    #[serde(default)]
    message: String,
}

/// HTTP client for the email verification service.
///
/// Constructed once at startup; the underlying reqwest client and its
/// connection pool are reused across requests.
pub struct VerifierClient {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl VerifierClient {
    pub fn new(config: EmailVerifierConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: config.base_url,
            api_token: config.api_token,
        }
    }
}

#[async_trait]
impl EmailVerifier for VerifierClient {
    async fn verify(&self, email: &str) -> Result<EmailVerdict> {
        let url = format!(
            "{}/verify/{}?token={}",
            self.base_url,
            urlencoding::encode(email),
            self.api_token.trim()
        );

        tracing::debug!("Verifying email deliverability: {}", email);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Email verifier request failed: {:?}", e);
            AppError::ExternalService(format!("Email verifier request failed: {}", e))
        })?;

        let body: VerifierResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse email verifier response: {:?}", e);
            AppError::ExternalService(format!("Failed to parse email verifier response: {}", e))
        })?;

        if !body.status {
            tracing::warn!(
                "Email rejected by verifier: {} ({:?})",
                email,
                body.error.as_ref().map(|e| e.message.as_str())
            );
        }

        Ok(EmailVerdict {
            valid: body.status,
            error_message: body.error.map(|e| e.message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_verdict() {
        let body: VerifierResponse = serde_json::from_str(r#"{"status": true}"#).unwrap();
        assert!(body.status);
        assert!(body.error.is_none());
    }

    #[test]
    fn test_parse_negative_verdict_with_message() {
        let body: VerifierResponse = serde_json::from_str(
            r#"{"status": false, "error": {"code": 2, "message": "mailbox does not exist"}}"#,
        )
        .unwrap();
        assert!(!body.status);
        assert_eq!(body.error.unwrap().message, "mailbox does not exist");
    }

    #[test]
    fn test_parse_negative_verdict_without_message() {
        let body: VerifierResponse =
            serde_json::from_str(r#"{"status": false, "error": {}}"#).unwrap();
        assert!(!body.status);
        assert_eq!(body.error.unwrap().message, "");
    }
}
