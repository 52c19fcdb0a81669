use crate::connectors::{ConnectorError, FileServiceConnector, ModelServiceConnector, SessionFile};
use crate::db;
use crate::models::SessionId;
use crate::services::context::{self, HistoryEntry};
use sqlx::PgPool;

/// How many turns are pulled from storage per request. The assembler
/// narrows this further to its own window.
pub const HISTORY_FETCH_LIMIT: i64 = 10;

#[derive(Debug)]
pub struct ChatOutcome {
    pub response: String,
    pub session_id: SessionId,
    pub model_used: String,
}

/// Per-request chat pipeline: resolve session, fetch history, fetch files,
/// assemble context, invoke model, persist turn, respond.
///
/// History and file lookups and turn persistence degrade softly (memory and
/// file-awareness are enhancements); only the model call may fail the
/// request.
pub struct ChatOrchestrator<'a> {
    pool: &'a PgPool,
    model_service: &'a dyn ModelServiceConnector,
    file_service: &'a dyn FileServiceConnector,
}

impl<'a> ChatOrchestrator<'a> {
    pub fn new(
        pool: &'a PgPool,
        model_service: &'a dyn ModelServiceConnector,
        file_service: &'a dyn FileServiceConnector,
    ) -> Self {
        Self {
            pool,
            model_service,
            file_service,
        }
    }

    pub async fn handle(
        &self,
        message: &str,
        supplied_session: Option<String>,
    ) -> Result<ChatOutcome, ConnectorError> {
        let session = SessionId::resolve(supplied_session);
        tracing::info!(session_id = %session, "Processing chat request");

        let history = self.fetch_history(&session).await;
        let files = self.fetch_files(&session).await;

        let prompt = context::assemble(message, &history, &files);
        let reply = self.model_service.generate(&prompt).await?;

        self.persist_turn(&session, message, &reply.response, &reply.model_used)
            .await;

        Ok(ChatOutcome {
            response: reply.response,
            session_id: session,
            model_used: reply.model_used,
        })
    }

    async fn fetch_history(&self, session: &SessionId) -> Vec<HistoryEntry> {
        match db::conversation::fetch_recent(self.pool, session.as_str(), HISTORY_FETCH_LIMIT).await
        {
            Ok(turns) => turns
                .into_iter()
                .map(|turn| HistoryEntry {
                    message: turn.user_message,
                    response: turn.model_response,
                })
                .collect(),
            Err(err) => {
                tracing::warn!(session_id = %session, "History fetch degraded to empty: {}", err);
                Vec::new()
            }
        }
    }

    async fn fetch_files(&self, session: &SessionId) -> Vec<SessionFile> {
        match self.file_service.list_files(session.as_str()).await {
            Ok(files) => files,
            Err(err) => {
                tracing::warn!(session_id = %session, "File fetch degraded to empty: {}", err);
                Vec::new()
            }
        }
    }

    async fn persist_turn(&self, session: &SessionId, message: &str, response: &str, model: &str) {
        // The caller already has their answer; a lost turn is logged only.
        if let Err(err) =
            db::conversation::insert(self.pool, session.as_str(), message, response, model).await
        {
            tracing::warn!(session_id = %session, "Failed to persist turn: {}", err);
        }
    }
}
