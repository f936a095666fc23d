//! Broadcast repository for announcement persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;
use vault_core::{Broadcast, BroadcastId, Priority};

use crate::{DbError, get_db};

/// Repository for broadcast persistence operations.
pub struct BroadcastRepository;

/// Internal record type for SurrealDB reads.
#[derive(Debug, Deserialize)]
struct BroadcastRecord {
    id: Option<Thing>,
    title: String,
    message: String,
    priority: Priority,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl BroadcastRecord {
    fn into_broadcast(self) -> Broadcast {
        let id_str = self.id.as_ref().map(|t| t.id.to_raw()).unwrap_or_default();
        let id = BroadcastId::parse(&id_str).unwrap_or_default();
        Broadcast {
            id,
            title: self.title,
            message: self.message,
            priority: self.priority,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// Struct for creating broadcasts - omits datetime fields to use SurrealDB defaults.
#[derive(Debug, Clone, Serialize)]
struct BroadcastCreate {
    title: String,
    message: String,
    priority: Priority,
    is_active: bool,
}

impl BroadcastRepository {
    /// Create a new broadcast in the database.
    pub async fn create(broadcast: &Broadcast) -> Result<Broadcast, DbError> {
        let db = get_db()?;
        let broadcast_id = broadcast.id.to_string();

        let create_data = BroadcastCreate {
            title: broadcast.title.clone(),
            message: broadcast.message.clone(),
            priority: broadcast.priority,
            is_active: broadcast.is_active,
        };

        let record: Option<BroadcastRecord> = db
            .create(("broadcast", &broadcast_id))
            .content(create_data)
            .await?;

        record
            .map(BroadcastRecord::into_broadcast)
            .ok_or_else(|| DbError::Query("Failed to create broadcast".into()))
    }

    /// Get a broadcast by ID.
    pub async fn get(id: BroadcastId) -> Result<Broadcast, DbError> {
        let db = get_db()?;

        let record: Option<BroadcastRecord> = db.select(("broadcast", id.to_string())).await?;

        record
            .map(BroadcastRecord::into_broadcast)
            .ok_or_else(|| DbError::NotFound(format!("Broadcast not found: {}", id)))
    }

    /// Get the single most-recently-created active broadcast, if any.
    ///
    /// This is the only query the reveal path uses: raw feed events are
    /// never applied directly, each event triggers this re-fetch instead.
    pub async fn latest_active() -> Result<Option<Broadcast>, DbError> {
        let db = get_db()?;

        let mut result = db
            .query(
                "SELECT * FROM broadcast WHERE is_active = true ORDER BY created_at DESC LIMIT 1",
            )
            .await?;

        let records: Vec<BroadcastRecord> = result.take(0)?;

        Ok(records
            .into_iter()
            .next()
            .map(BroadcastRecord::into_broadcast))
    }

    /// List the most recent broadcasts, newest first.
    pub async fn list_recent(limit: usize) -> Result<Vec<Broadcast>, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("SELECT * FROM broadcast ORDER BY created_at DESC LIMIT $limit")
            .bind(("limit", limit))
            .await?;

        let records: Vec<BroadcastRecord> = result.take(0)?;

        Ok(records
            .into_iter()
            .map(BroadcastRecord::into_broadcast)
            .collect())
    }

    /// Deactivate a broadcast so it no longer wins the latest-active query.
    pub async fn deactivate(id: BroadcastId) -> Result<Broadcast, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("UPDATE type::thing('broadcast', $id) SET is_active = false RETURN AFTER")
            .bind(("id", id.to_string()))
            .await?;

        let records: Vec<BroadcastRecord> = result.take(0)?;

        records
            .into_iter()
            .next()
            .map(BroadcastRecord::into_broadcast)
            .ok_or_else(|| DbError::NotFound(format!("Broadcast not found: {}", id)))
    }
}
