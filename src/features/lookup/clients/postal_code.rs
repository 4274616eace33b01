use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::core::config::PostalLookupConfig;
use crate::core::error::{AppError, Result};

/// Address record resolved from a postal code (ViaCEP shape).
///
/// Only the not-found marker is interpreted by the workflow; the address
/// content is passed through for callers that want it.
#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub localidade: Option<String>,
    pub uf: Option<String>,
}

/// Resolves a postal code to an address record via an external service
#[async_trait]
pub trait PostalCodeLookup: Send + Sync {
    /// `Ok(None)` means the service answered with its explicit not-found
    /// marker; transport and parse failures are errors.
    async fn resolve(&self, postal_code: &str) -> Result<Option<Address>>;
}

/// ViaCEP response: an address body, or an `erro` marker for unknown codes
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default, deserialize_with = "bool_or_string")]
    erro: bool,
    #[serde(flatten)]
    address: Address,
}

/// ViaCEP has emitted the not-found marker both as boolean `true` and as
/// the string `"true"` depending on API version; accept either shape
fn bool_or_string<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Text(String),
    }

    Ok(match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => b,
        BoolOrString::Text(s) => s.eq_ignore_ascii_case("true"),
    })
}

/// HTTP client for the ViaCEP postal code service
pub struct ViaCepClient {
    client: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(config: PostalLookupConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: config.base_url,
        }
    }
}

#[async_trait]
impl PostalCodeLookup for ViaCepClient {
    async fn resolve(&self, postal_code: &str) -> Result<Option<Address>> {
        let url = format!(
            "{}/ws/{}/json/",
            self.base_url,
            urlencoding::encode(postal_code)
        );

        tracing::debug!("Resolving postal code: {}", postal_code);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Postal code lookup request failed: {:?}", e);
            AppError::ExternalService(format!("Postal code lookup request failed: {}", e))
        })?;

        let body: ViaCepResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse postal code response: {:?}", e);
            AppError::ExternalService(format!("Failed to parse postal code response: {}", e))
        })?;

        if body.erro {
            tracing::warn!("Postal code not found: {}", postal_code);
            return Ok(None);
        }

        Ok(Some(body.address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolved_address() {
        let body: ViaCepResponse = serde_json::from_str(
            r#"{
                "cep": "01001-000",
                "logradouro": "Praça da Sé",
                "complemento": "lado ímpar",
                "bairro": "Sé",
                "localidade": "São Paulo",
                "uf": "SP"
            }"#,
        )
        .unwrap();
        assert!(!body.erro);
        assert_eq!(body.address.localidade.as_deref(), Some("São Paulo"));
    }

    #[test]
    fn test_parse_not_found_marker() {
        let body: ViaCepResponse = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert!(body.erro);
        assert!(body.address.cep.is_none());
    }

    #[test]
    fn test_parse_string_not_found_marker() {
        let body: ViaCepResponse = serde_json::from_str(r#"{"erro": "true"}"#).unwrap();
        assert!(body.erro);
        assert!(body.address.cep.is_none());
    }

    #[test]
    fn test_parse_string_false_marker_is_resolved() {
        let body: ViaCepResponse =
            serde_json::from_str(r#"{"erro": "false", "cep": "01001-000"}"#).unwrap();
        assert!(!body.erro);
        assert_eq!(body.address.cep.as_deref(), Some("01001-000"));
    }
}
