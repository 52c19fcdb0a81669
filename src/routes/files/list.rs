use crate::db;
use crate::helpers;
use actix_web::{get, web, Responder, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

const MISSING_CONTENT: &str = "No content available";

#[derive(Debug, Serialize)]
struct FileView {
    id: i32,
    /// Uploader-facing name, not the stored one.
    filename: String,
    content: String,
    content_type: String,
    file_size: i64,
    upload_date: DateTime<Utc>,
    has_text: bool,
}

#[derive(Debug, Serialize)]
struct FileListResponse {
    session_id: String,
    files: Vec<FileView>,
}

/// GET /files/{session_id}
/// Files for a session with their extracted content, newest first.
#[tracing::instrument(name = "List session files.")]
#[get("/files/{session_id}")]
pub async fn handler(path: web::Path<String>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let session_id = path.into_inner();

    db::uploaded_file::fetch_by_session(pg_pool.get_ref(), &session_id)
        .await
        .map_err(|_err| helpers::internal_server_error("Failed to retrieve files"))
        .map(|files| {
            let files = files
                .into_iter()
                .map(|file| {
                    let has_text = file.has_text();
                    FileView {
                        id: file.id,
                        filename: file.original_name,
                        content: file
                            .extracted_text
                            .unwrap_or_else(|| MISSING_CONTENT.to_string()),
                        content_type: file.file_type,
                        file_size: file.file_size,
                        upload_date: file.created_at,
                        has_text,
                    }
                })
                .collect();

            web::Json(FileListResponse { session_id, files })
        })
}
