use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

#[allow(clippy::too_many_arguments)]
pub async fn insert(
    pool: &PgPool,
    session_id: &str,
    filename: &str,
    original_name: &str,
    file_type: &str,
    file_size: i64,
    file_path: &str,
    extracted_text: Option<&str>,
) -> Result<models::UploadedFile, String> {
    let query_span = tracing::info_span!("Inserting uploaded file into database");
    sqlx::query_as::<_, models::UploadedFile>(
        r#"
        INSERT INTO uploaded_files
            (session_id, filename, original_name, file_type, file_size, file_path, extracted_text)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, session_id, filename, original_name, file_type, file_size,
                  file_path, extracted_text, created_at
        "#,
    )
    .bind(session_id)
    .bind(filename)
    .bind(original_name)
    .bind(file_type)
    .bind(file_size)
    .bind(file_path)
    .bind(extracted_text)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to store file info: {:?}", err);
        "Failed to store file info".to_string()
    })
}

/// Files for a session, newest upload first.
pub async fn fetch_by_session(
    pool: &PgPool,
    session_id: &str,
) -> Result<Vec<models::UploadedFile>, String> {
    let query_span = tracing::info_span!("Fetching uploaded files by session id");
    sqlx::query_as::<_, models::UploadedFile>(
        r#"
        SELECT id, session_id, filename, original_name, file_type, file_size,
               file_path, extracted_text, created_at
        FROM uploaded_files
        WHERE session_id = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(session_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch uploaded files: {:?}", err);
        "Failed to fetch uploaded files".to_string()
    })
}

pub async fn fetch_by_id(
    pool: &PgPool,
    file_id: i32,
) -> Result<Option<models::UploadedFile>, String> {
    let query_span = tracing::info_span!("Fetching uploaded file by id");
    sqlx::query_as::<_, models::UploadedFile>(
        r#"
        SELECT id, session_id, filename, original_name, file_type, file_size,
               file_path, extracted_text, created_at
        FROM uploaded_files
        WHERE id = $1
        "#,
    )
    .bind(file_id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch uploaded file: {:?}", err);
        "Failed to fetch uploaded file".to_string()
    })
}

pub async fn delete(pool: &PgPool, file_id: i32) -> Result<u64, String> {
    let query_span = tracing::info_span!("Deleting uploaded file");
    sqlx::query(r#"DELETE FROM uploaded_files WHERE id = $1"#)
        .bind(file_id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Failed to delete uploaded file: {:?}", err);
            "Failed to delete uploaded file".to_string()
        })
}
