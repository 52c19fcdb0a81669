use crate::db;
use crate::helpers;
use actix_web::{get, web, Responder, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, Serialize)]
struct HistoryItem {
    message: String,
    response: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct HistoryResponse {
    session_id: String,
    history: Vec<HistoryItem>,
}

/// GET /chat/history/{session_id}
#[tracing::instrument(name = "Get chat history.")]
#[get("/chat/history/{session_id}")]
pub async fn handler(path: web::Path<String>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let session_id = path.into_inner();

    db::conversation::fetch_all(pg_pool.get_ref(), &session_id)
        .await
        .map_err(|_err| helpers::internal_server_error("Failed to retrieve history"))
        .map(|turns| {
            let history = turns
                .into_iter()
                .map(|turn| HistoryItem {
                    message: turn.user_message,
                    response: turn.model_response,
                    created_at: turn.created_at,
                })
                .collect();
            web::Json(HistoryResponse {
                session_id,
                history,
            })
        })
}
