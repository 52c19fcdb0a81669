use serde::{Deserialize, Serialize};

/// Configuration for external service connectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    pub model_service: ModelServiceConfig,
    pub file_service: FileServiceConfig,
}

/// Model backend connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelServiceConfig {
    /// Base URL for the model backend (e.g. http://localhost:9000)
    pub base_url: String,
    /// Request timeout in seconds. Generation is slow; expiry here is a
    /// hard failure for the chat request.
    pub timeout_secs: u64,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

impl Default for ModelServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9000".to_string(),
            timeout_secs: 120,
            max_tokens: Some(2000),
            temperature: Some(0.7),
        }
    }
}

/// File service connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileServiceConfig {
    /// Base URL for the file service (e.g. http://localhost:7000)
    pub base_url: String,
    /// Short timeout; a slow file lookup degrades to an empty file set
    /// instead of stalling the chat request.
    pub timeout_secs: u64,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:7000".to_string(),
            timeout_secs: 5,
        }
    }
}
