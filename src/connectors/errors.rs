use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

/// Errors that can occur during external service communication
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// Service unreachable or timeout
    #[error("Service unavailable: {0}")]
    Unavailable(String),
    /// Collaborator answered with a non-success status; forwarded outward
    #[error("Upstream returned status {status}: {detail}")]
    UpstreamStatus { status: u16, detail: String },
    /// Invalid response format from external service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// Internal error in connector
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for ConnectorError {
    fn error_response(&self) -> HttpResponse {
        // Outward bodies carry a stable classification only; the raw detail
        // string stays in the log.
        let message = match self {
            Self::Unavailable(_) => "Model service is unavailable",
            Self::UpstreamStatus { .. } => "Error from model service",
            Self::InvalidResponse(_) => "Invalid model service response",
            Self::Internal(_) => "Internal server error",
        };
        tracing::error!("connector error: {}", self);

        HttpResponse::build(self.status_code()).json(json!({
            "error": message,
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::UpstreamStatus { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            Self::Unavailable(err.to_string())
        } else {
            Self::InvalidResponse(err.to_string())
        }
    }
}
