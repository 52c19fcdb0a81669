use crate::db;
use crate::helpers;
use actix_web::{get, web, Responder, Result};
use serde_json::json;
use sqlx::PgPool;

/// GET /file/content/{file_id}
#[tracing::instrument(name = "Get file content.")]
#[get("/file/content/{file_id}")]
pub async fn handler(path: web::Path<i32>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let file_id = path.into_inner();

    db::uploaded_file::fetch_by_id(pg_pool.get_ref(), file_id)
        .await
        .map_err(|_err| helpers::internal_server_error("Failed to retrieve file content"))
        .and_then(|file| match file {
            Some(file) => Ok(web::Json(json!({
                "file_id": file.id,
                "filename": file.original_name,
                "content": file
                    .extracted_text
                    .unwrap_or_else(|| "No text content available".to_string()),
            }))),
            None => Err(helpers::not_found("File not found")),
        })
}
