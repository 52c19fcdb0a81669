use crate::connectors::{FileServiceConnector, ModelServiceConnector};
use actix_web::{get, web, Responder};
use serde_json::json;
use std::sync::Arc;

#[get("/")]
pub async fn root() -> impl Responder {
    web::Json(json!({
        "message": "API Gateway is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Operational visibility only; not part of the chat contract.
#[tracing::instrument(name = "Services status.", skip_all)]
#[get("/services/status")]
pub async fn services_status(
    model_service: web::Data<Arc<dyn ModelServiceConnector>>,
    file_service: web::Data<Arc<dyn FileServiceConnector>>,
) -> impl Responder {
    let model_status = if model_service.is_healthy().await {
        "healthy"
    } else {
        "unreachable"
    };
    let file_status = if file_service.is_healthy().await {
        "healthy"
    } else {
        "unreachable"
    };

    web::Json(json!({
        "services": {
            "api-gateway": "healthy",
            "model-service": model_status,
            "file-service": file_status,
        }
    }))
}
