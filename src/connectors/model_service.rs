use super::config::ModelServiceConfig;
use super::errors::ConnectorError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::Instrument;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

/// Generated text plus the identifier of the model that produced it.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelReply {
    pub response: String,
    pub model_used: String,
}

#[async_trait::async_trait]
pub trait ModelServiceConnector: Send + Sync {
    /// Send an assembled prompt to the model backend. Transport failure is
    /// a hard error; a non-success status is forwarded as-is.
    async fn generate(&self, prompt: &str) -> Result<ModelReply, ConnectorError>;

    async fn is_healthy(&self) -> bool;
}

/// HTTP client for the model backend
pub struct ModelServiceClient {
    base_url: String,
    http_client: reqwest::Client,
    max_tokens: Option<u32>,
    temperature: Option<f64>,
}

impl ModelServiceClient {
    pub fn new(config: &ModelServiceConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

#[async_trait::async_trait]
impl ModelServiceConnector for ModelServiceClient {
    async fn generate(&self, prompt: &str) -> Result<ModelReply, ConnectorError> {
        let span = tracing::info_span!(
            "model_service_generate",
            prompt_chars = prompt.chars().count()
        );

        let url = format!("{}/generate", self.base_url);
        let payload = GenerateRequest {
            prompt,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let resp = self
            .http_client
            .post(&url)
            .json(&payload)
            .send()
            .instrument(span)
            .await
            .map_err(|err| {
                tracing::error!("Error connecting to model service: {:?}", err);
                ConnectorError::Unavailable(err.to_string())
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let detail = resp.text().await.unwrap_or_default();
            tracing::error!(status, "Model service returned non-success: {}", detail);
            return Err(ConnectorError::UpstreamStatus { status, detail });
        }

        resp.json::<ModelReply>()
            .await
            .map_err(|err| ConnectorError::InvalidResponse(err.to_string()))
    }

    async fn is_healthy(&self) -> bool {
        let url = format!("{}/health_check", self.base_url);
        match self
            .http_client
            .get(&url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}
