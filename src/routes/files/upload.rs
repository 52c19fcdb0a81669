use crate::configuration::Settings;
use crate::db;
use crate::helpers;
use crate::models;
use crate::services::extractor;
use actix_multipart::Multipart;
use actix_web::{post, web, Responder, Result};
use futures_util::TryStreamExt;
use serde::Serialize;
use sqlx::PgPool;
use std::path::Path;
use uuid::Uuid;

pub const ALLOWED_EXTENSIONS: [&str; 6] = [".pdf", ".txt", ".docx", ".csv", ".json", ".md"];

#[derive(Debug, Serialize)]
pub struct FileSummary {
    pub id: i32,
    pub filename: String,
    pub original_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub has_text: bool,
}

impl From<&models::UploadedFile> for FileSummary {
    fn from(file: &models::UploadedFile) -> Self {
        FileSummary {
            id: file.id,
            filename: file.filename.clone(),
            original_name: file.original_name.clone(),
            file_type: file.file_type.clone(),
            file_size: file.file_size,
            has_text: file.has_text(),
        }
    }
}

#[derive(Debug, Serialize)]
struct UploadResponse {
    message: String,
    files: Vec<FileSummary>,
}

/// POST /upload
/// Multipart batch: one or more file parts plus a `session_id` text field.
/// Any single failure aborts the whole batch; files already written for the
/// batch are cleaned up best-effort.
#[tracing::instrument(name = "Upload files.", skip_all)]
#[post("/upload")]
pub async fn handler(
    mut payload: Multipart,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let max_size = settings.uploads.max_file_size;

    let mut session_id: Option<String> = None;
    let mut incoming: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(mut field) = payload.try_next().await? {
        let disposition = field.content_disposition();
        let part_name = disposition.get_name().unwrap_or("").to_string();
        let original_name = disposition.get_filename().map(str::to_string);

        match (part_name.as_str(), original_name) {
            ("session_id", _) => {
                let mut value = Vec::new();
                while let Some(chunk) = field.try_next().await? {
                    value.extend_from_slice(&chunk);
                }
                session_id = Some(String::from_utf8_lossy(&value).trim().to_string());
            }
            (_, Some(original)) => {
                let mut bytes = Vec::new();
                while let Some(chunk) = field.try_next().await? {
                    if bytes.len() + chunk.len() > max_size {
                        return Err(helpers::bad_request(&format!(
                            "File {} is too large. Max size is {}MB",
                            original,
                            max_size / (1024 * 1024)
                        )));
                    }
                    bytes.extend_from_slice(&chunk);
                }
                incoming.push((original, bytes));
            }
            _ => {
                // drain unknown text parts
                while field.try_next().await?.is_some() {}
            }
        }
    }

    let session_id = session_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| helpers::bad_request("session_id form field is required"))?;
    if incoming.is_empty() {
        return Err(helpers::bad_request("No files supplied"));
    }

    let mut uploaded: Vec<models::UploadedFile> = Vec::new();
    let mut failure: Option<actix_web::Error> = None;

    for (original, bytes) in incoming {
        match store_file(pg_pool.get_ref(), &settings, &session_id, &original, bytes).await {
            Ok(file) => {
                tracing::info!(session_id = %session_id, "Uploaded and processed {}", file.original_name);
                uploaded.push(file);
            }
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }

    if let Some(err) = failure {
        // batch abort: undo what this batch already wrote
        for file in &uploaded {
            let _ = tokio::fs::remove_file(&file.file_path).await;
            let _ = db::uploaded_file::delete(pg_pool.get_ref(), file.id).await;
        }
        return Err(err);
    }

    Ok(web::Json(UploadResponse {
        message: format!("Successfully uploaded {} files", uploaded.len()),
        files: uploaded.iter().map(FileSummary::from).collect(),
    }))
}

async fn store_file(
    pool: &PgPool,
    settings: &Settings,
    session_id: &str,
    original_name: &str,
    bytes: Vec<u8>,
) -> Result<models::UploadedFile, actix_web::Error> {
    let file_ext = file_extension(original_name);
    if !ALLOWED_EXTENSIONS.contains(&file_ext.as_str()) {
        return Err(helpers::bad_request(&format!(
            "File type {} not supported. Supported types: {:?}",
            file_ext, ALLOWED_EXTENSIONS
        )));
    }

    let stored_name = format!("{}{}", Uuid::new_v4(), file_ext);
    let file_path = Path::new(&settings.uploads.dir).join(&stored_name);
    let file_size = bytes.len() as i64;

    tokio::fs::create_dir_all(&settings.uploads.dir)
        .await
        .map_err(|err| {
            tracing::error!("Failed to create upload dir: {:?}", err);
            helpers::internal_server_error("Failed to store file")
        })?;
    tokio::fs::write(&file_path, &bytes).await.map_err(|err| {
        tracing::error!("Failed to write {}: {:?}", file_path.display(), err);
        helpers::internal_server_error("Failed to store file")
    })?;

    // extraction parses whole documents; keep it off the async workers
    let ext_for_task = file_ext.clone();
    let extraction =
        tokio::task::spawn_blocking(move || extractor::extract_text(&bytes, &ext_for_task)).await;
    let extracted = match extraction {
        Ok(extracted) => extracted,
        Err(err) => {
            // a panicking parser must not leave the written file behind
            let _ = tokio::fs::remove_file(&file_path).await;
            tracing::error!("Extraction task failed: {:?}", err);
            return Err(helpers::internal_server_error("Failed to process file"));
        }
    };

    let inserted = db::uploaded_file::insert(
        pool,
        session_id,
        &stored_name,
        original_name,
        &file_ext,
        file_size,
        &file_path.to_string_lossy(),
        extracted.as_deref(),
    )
    .await;

    match inserted {
        Ok(file) => Ok(file),
        Err(err) => {
            let _ = tokio::fs::remove_file(&file_path).await;
            tracing::error!("Failed to record upload: {}", err);
            Err(helpers::internal_server_error("Failed to store file info"))
        }
    }
}

fn file_extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}
