use crate::db;
use crate::helpers;
use actix_web::{delete, web, Responder, Result};
use serde_json::json;
use sqlx::PgPool;

/// DELETE /chat/history/{session_id}
/// Removes every turn stored for the session.
#[tracing::instrument(name = "Clear session history.")]
#[delete("/chat/history/{session_id}")]
pub async fn handler(path: web::Path<String>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let session_id = path.into_inner();

    db::conversation::delete_by_session(pg_pool.get_ref(), &session_id)
        .await
        .map_err(|_err| helpers::internal_server_error("Failed to clear session"))
        .map(|deleted| {
            web::Json(json!({
                "message": "Session history cleared",
                "deleted_turns": deleted,
            }))
        })
}
