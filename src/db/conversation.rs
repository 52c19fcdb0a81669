use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn insert(
    pool: &PgPool,
    session_id: &str,
    user_message: &str,
    model_response: &str,
    model_used: &str,
) -> Result<models::ConversationTurn, String> {
    let query_span = tracing::info_span!("Inserting conversation turn into database");
    sqlx::query_as::<_, models::ConversationTurn>(
        r#"
        INSERT INTO conversation_history (session_id, user_message, model_response, model_used)
        VALUES ($1, $2, $3, $4)
        RETURNING id, session_id, user_message, model_response, model_used, created_at
        "#,
    )
    .bind(session_id)
    .bind(user_message)
    .bind(model_response)
    .bind(model_used)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert conversation turn: {:?}", err);
        "Failed to store conversation turn".to_string()
    })
}

/// The most recent `limit` turns for a session, returned oldest-first so
/// they can be rendered into the prompt in conversation order.
pub async fn fetch_recent(
    pool: &PgPool,
    session_id: &str,
    limit: i64,
) -> Result<Vec<models::ConversationTurn>, String> {
    let query_span = tracing::info_span!("Fetching recent turns by session id");
    sqlx::query_as::<_, models::ConversationTurn>(
        r#"
        SELECT id, session_id, user_message, model_response, model_used, created_at
        FROM (
            SELECT id, session_id, user_message, model_response, model_used, created_at
            FROM conversation_history
            WHERE session_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
        ) recent
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(session_id)
    .bind(limit)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch conversation history: {:?}", err);
        "Failed to fetch conversation history".to_string()
    })
}

pub async fn fetch_all(
    pool: &PgPool,
    session_id: &str,
) -> Result<Vec<models::ConversationTurn>, String> {
    let query_span = tracing::info_span!("Fetching full history by session id");
    sqlx::query_as::<_, models::ConversationTurn>(
        r#"
        SELECT id, session_id, user_message, model_response, model_used, created_at
        FROM conversation_history
        WHERE session_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(session_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch conversation history: {:?}", err);
        "Failed to fetch conversation history".to_string()
    })
}

pub async fn delete_by_session(pool: &PgPool, session_id: &str) -> Result<u64, String> {
    let query_span = tracing::info_span!("Deleting turns by session id");
    sqlx::query(r#"DELETE FROM conversation_history WHERE session_id = $1"#)
        .bind(session_id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Failed to clear session history: {:?}", err);
            "Failed to clear session history".to_string()
        })
}
