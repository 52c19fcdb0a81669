use super::config::FileServiceConfig;
use super::errors::ConnectorError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::Instrument;

/// One uploaded file as served back by the file service for a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFile {
    pub filename: String,
    pub content: Option<String>,
    pub content_type: String,
}

#[derive(Debug, Deserialize)]
struct FileListResponse {
    files: Vec<SessionFile>,
}

#[async_trait::async_trait]
pub trait FileServiceConnector: Send + Sync {
    /// List the files uploaded for a session, extracted text included.
    /// Callers treat any failure as an empty file set.
    async fn list_files(&self, session_id: &str) -> Result<Vec<SessionFile>, ConnectorError>;

    async fn is_healthy(&self) -> bool;
}

/// HTTP client for the file service
pub struct FileServiceClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl FileServiceClient {
    pub fn new(config: &FileServiceConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }
}

#[async_trait::async_trait]
impl FileServiceConnector for FileServiceClient {
    async fn list_files(&self, session_id: &str) -> Result<Vec<SessionFile>, ConnectorError> {
        let span = tracing::info_span!("file_service_list", session_id = %session_id);

        let url = format!("{}/files/{}", self.base_url, session_id);
        let resp = self
            .http_client
            .get(&url)
            .send()
            .instrument(span)
            .await
            .map_err(ConnectorError::from)?;

        if !resp.status().is_success() {
            return Err(ConnectorError::UpstreamStatus {
                status: resp.status().as_u16(),
                detail: resp.text().await.unwrap_or_default(),
            });
        }

        resp.json::<FileListResponse>()
            .await
            .map(|body| body.files)
            .map_err(|err| ConnectorError::InvalidResponse(err.to_string()))
    }

    async fn is_healthy(&self) -> bool {
        let url = format!("{}/health_check", self.base_url);
        match self.http_client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}
