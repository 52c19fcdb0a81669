use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque token grouping a user's conversation turns and uploaded files.
/// There is no session table; the id exists only as a key shared by
/// `conversation_history` and `uploaded_files` rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        SessionId(Uuid::new_v4().to_string())
    }

    /// A caller-supplied token is used verbatim; a missing or blank one is
    /// replaced with a freshly generated token.
    pub fn resolve(supplied: Option<String>) -> Self {
        match supplied {
            Some(id) if !id.trim().is_empty() => SessionId(id),
            _ => Self::generate(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        SessionId(value)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplied_token_is_kept_verbatim() {
        let id = SessionId::resolve(Some("abc-123".to_string()));
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn missing_or_blank_token_generates_a_fresh_one() {
        let generated = SessionId::resolve(None);
        assert!(!generated.as_str().is_empty());

        let blank = SessionId::resolve(Some("   ".to_string()));
        assert_ne!(blank.as_str(), "   ");
    }

    #[test]
    fn generated_tokens_are_unique() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }
}
