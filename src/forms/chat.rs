use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct ChatRequest {
    #[validate(min_length = 1)]
    pub message: String,
    /// Opaque token from a previous response; omitted on the first turn.
    pub session_id: Option<String>,
}
