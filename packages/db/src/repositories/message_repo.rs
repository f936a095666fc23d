//! Dashboard message repository.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;
use vault_core::{Message, MessageId, MessageKind};

use crate::{DbError, get_db};

/// Repository for global dashboard messages.
pub struct MessageRepository;

/// Internal record type for SurrealDB reads.
#[derive(Debug, Deserialize)]
struct MessageRecord {
    id: Option<Thing>,
    kind: MessageKind,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
}

impl MessageRecord {
    fn into_message(self) -> Message {
        let id_str = self.id.as_ref().map(|t| t.id.to_raw()).unwrap_or_default();
        let id = MessageId::parse(&id_str).unwrap_or_default();
        Message {
            id,
            kind: self.kind,
            title: self.title,
            body: self.body,
            created_at: self.created_at,
        }
    }
}

/// Struct for creating messages - omits the datetime field to use the SurrealDB default.
#[derive(Debug, Clone, Serialize)]
struct MessageCreate {
    kind: MessageKind,
    title: String,
    body: String,
}

impl MessageRepository {
    /// Create a new message in the database.
    pub async fn create(message: &Message) -> Result<Message, DbError> {
        let db = get_db()?;

        let record: Option<MessageRecord> = db
            .create(("message", message.id.to_string()))
            .content(MessageCreate {
                kind: message.kind,
                title: message.title.clone(),
                body: message.body.clone(),
            })
            .await?;

        record
            .map(MessageRecord::into_message)
            .ok_or_else(|| DbError::Query("Failed to create message".into()))
    }

    /// List recent messages, newest first.
    pub async fn list_recent(limit: usize) -> Result<Vec<Message>, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("SELECT * FROM message ORDER BY created_at DESC LIMIT $limit")
            .bind(("limit", limit))
            .await?;

        let records: Vec<MessageRecord> = result.take(0)?;

        Ok(records
            .into_iter()
            .map(MessageRecord::into_message)
            .collect())
    }
}
