use crate::connectors::{FileServiceConnector, ModelServiceConnector};
use crate::forms;
use crate::helpers;
use crate::models::SessionId;
use crate::services::ChatOrchestrator;
use actix_web::{post, web, Responder, Result};
use serde::Serialize;
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: SessionId,
    pub model_used: String,
}

/// POST /chat
/// Runs one conversation turn: history and files for the session are folded
/// into the prompt, the model backend is invoked, the turn is persisted.
#[tracing::instrument(name = "Chat request.", skip_all)]
#[post("/chat")]
pub async fn handler(
    form: web::Json<forms::ChatRequest>,
    pg_pool: web::Data<PgPool>,
    model_service: web::Data<Arc<dyn ModelServiceConnector>>,
    file_service: web::Data<Arc<dyn FileServiceConnector>>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        tracing::debug!("Invalid chat request: {}", errors);
        return Err(helpers::bad_request("message must not be empty"));
    }
    let form = form.into_inner();

    let orchestrator = ChatOrchestrator::new(
        pg_pool.get_ref(),
        model_service.get_ref().as_ref(),
        file_service.get_ref().as_ref(),
    );

    let outcome = orchestrator.handle(&form.message, form.session_id).await?;

    Ok(web::Json(ChatResponse {
        response: outcome.response,
        session_id: outcome.session_id,
        model_used: outcome.model_used,
    }))
}
