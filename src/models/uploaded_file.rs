use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct UploadedFile {
    pub id: i32,
    pub session_id: String,
    /// Stored (uuid-based) filename on disk.
    pub filename: String,
    /// Filename as supplied by the uploader.
    pub original_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub file_path: String,
    /// Absent when extraction failed or the format carries no text.
    pub extracted_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UploadedFile {
    pub fn has_text(&self) -> bool {
        self.extracted_text
            .as_deref()
            .map(|text| !text.is_empty())
            .unwrap_or(false)
    }
}
