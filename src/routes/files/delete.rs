use crate::db;
use crate::helpers;
use actix_web::{delete, web, Responder, Result};
use serde_json::json;
use sqlx::PgPool;

/// DELETE /file/{file_id}
/// Removes the metadata row and the stored file; a missing physical file is
/// tolerated.
#[tracing::instrument(name = "Delete file.")]
#[delete("/file/{file_id}")]
pub async fn handler(path: web::Path<i32>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let file_id = path.into_inner();

    let file = db::uploaded_file::fetch_by_id(pg_pool.get_ref(), file_id)
        .await
        .map_err(|_err| helpers::internal_server_error("Failed to delete file"))?
        .ok_or_else(|| helpers::not_found("File not found"))?;

    db::uploaded_file::delete(pg_pool.get_ref(), file_id)
        .await
        .map_err(|_err| helpers::internal_server_error("Failed to delete file"))?;

    if let Err(err) = tokio::fs::remove_file(&file.file_path).await {
        tracing::debug!("Stored file already gone: {:?}", err);
    }

    Ok(web::Json(json!({ "message": "File deleted successfully" })))
}
