use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user message plus the model response it produced. Append-only;
/// removed only by an explicit session clear.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct ConversationTurn {
    pub id: i32,
    pub session_id: String,
    pub user_message: String,
    pub model_response: String,
    pub model_used: String,
    pub created_at: DateTime<Utc>,
}
