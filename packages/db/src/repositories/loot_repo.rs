//! Loot box repository: admin drops and per-user open claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;
use vault_core::{LootBox, LootBoxId, Rarity};

use crate::{DbError, get_db};

/// Repository for loot boxes and their open claims.
///
/// A box addressed to one user is visible to that user only; a box without
/// a recipient is visible to everyone. Each user opens a given box at most
/// once, enforced by the claim record key `box_id__email`.
pub struct LootRepository;

/// Internal record type for SurrealDB reads.
#[derive(Debug, Deserialize)]
struct LootBoxRecord {
    id: Option<Thing>,
    name: String,
    description: String,
    rarity: Rarity,
    coins: i64,
    contents: Vec<String>,
    recipient: Option<String>,
    created_at: DateTime<Utc>,
}

impl LootBoxRecord {
    fn into_loot_box(self) -> LootBox {
        let id_str = self.id.as_ref().map(|t| t.id.to_raw()).unwrap_or_default();
        let id = LootBoxId::parse(&id_str).unwrap_or_default();
        LootBox {
            id,
            name: self.name,
            description: self.description,
            rarity: self.rarity,
            coins: self.coins,
            contents: self.contents,
            recipient: self.recipient,
            created_at: self.created_at,
        }
    }
}

/// Struct for creating loot boxes - omits the datetime field to use the SurrealDB default.
#[derive(Debug, Clone, Serialize)]
struct LootBoxCreate {
    name: String,
    description: String,
    rarity: Rarity,
    coins: i64,
    contents: Vec<String>,
    recipient: Option<String>,
}

/// Internal claim record for SurrealDB reads.
#[derive(Debug, Deserialize)]
struct LootClaimRecord {
    #[allow(dead_code)]
    id: Option<Thing>,
    box_id: String,
    #[allow(dead_code)]
    email: String,
    #[allow(dead_code)]
    opened_at: DateTime<Utc>,
}

/// Struct for recording an open - omits the datetime field to use the SurrealDB default.
#[derive(Debug, Clone, Serialize)]
struct LootClaimCreate {
    box_id: String,
    email: String,
}

fn claim_key(id: LootBoxId, email: &str) -> String {
    format!("{}__{}", id, email)
}

impl LootRepository {
    /// Create a new loot box in the database.
    pub async fn create(loot_box: &LootBox) -> Result<LootBox, DbError> {
        let db = get_db()?;

        let record: Option<LootBoxRecord> = db
            .create(("loot_box", loot_box.id.to_string()))
            .content(LootBoxCreate {
                name: loot_box.name.clone(),
                description: loot_box.description.clone(),
                rarity: loot_box.rarity,
                coins: loot_box.coins,
                contents: loot_box.contents.clone(),
                recipient: loot_box.recipient.clone(),
            })
            .await?;

        record
            .map(LootBoxRecord::into_loot_box)
            .ok_or_else(|| DbError::Query("Failed to create loot box".into()))
    }

    /// Get a loot box by ID.
    pub async fn get(id: LootBoxId) -> Result<LootBox, DbError> {
        let db = get_db()?;

        let record: Option<LootBoxRecord> = db.select(("loot_box", id.to_string())).await?;

        record
            .map(LootBoxRecord::into_loot_box)
            .ok_or_else(|| DbError::NotFound(format!("Loot box not found: {}", id)))
    }

    /// List the boxes `email` can still open, newest first.
    pub async fn list_pending(email: &str) -> Result<Vec<LootBox>, DbError> {
        let db = get_db()?;

        let mut result = db
            .query(
                "SELECT * FROM loot_box \
                 WHERE recipient = $email OR recipient = NONE \
                 ORDER BY created_at DESC",
            )
            .bind(("email", email.to_string()))
            .await?;
        let boxes: Vec<LootBoxRecord> = result.take(0)?;

        let mut result = db
            .query("SELECT * FROM loot_claim WHERE email = $email")
            .bind(("email", email.to_string()))
            .await?;
        let claims: Vec<LootClaimRecord> = result.take(0)?;
        let opened: Vec<String> = claims.into_iter().map(|c| c.box_id).collect();

        Ok(boxes
            .into_iter()
            .map(LootBoxRecord::into_loot_box)
            .filter(|b| !opened.contains(&b.id.to_string()))
            .collect())
    }

    /// Record that `email` opened a box. Fails on a repeat open.
    pub async fn record_open(id: LootBoxId, email: &str) -> Result<(), DbError> {
        let db = get_db()?;
        let key = claim_key(id, email);

        let existing: Option<LootClaimRecord> = db.select(("loot_claim", key.as_str())).await?;
        if existing.is_some() {
            return Err(DbError::InvalidState(format!(
                "Loot box {} already opened by {}",
                id, email
            )));
        }

        let record: Option<LootClaimRecord> = db
            .create(("loot_claim", key.as_str()))
            .content(LootClaimCreate {
                box_id: id.to_string(),
                email: email.to_string(),
            })
            .await?;

        record
            .map(|_| ())
            .ok_or_else(|| DbError::Query("Failed to record loot box open".into()))
    }
}
