//! Achievement reward claim repository.
//!
//! Achievement progress is never stored; it is derived from wallet counters
//! in `vault_core`. Only the one-time reward claim is persisted here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;
use vault_core::AchievementKind;

use crate::{DbError, get_db};

/// Repository for claimed achievement rewards.
pub struct AchievementRepository;

/// Internal record type for SurrealDB reads.
#[derive(Debug, Deserialize)]
struct ClaimRecord {
    #[allow(dead_code)]
    id: Option<Thing>,
    #[allow(dead_code)]
    email: String,
    kind: String,
    #[allow(dead_code)]
    claimed_at: DateTime<Utc>,
}

/// Struct for recording a claim - omits the datetime field to use the SurrealDB default.
#[derive(Debug, Clone, Serialize)]
struct ClaimCreate {
    email: String,
    kind: String,
}

fn claim_key(email: &str, kind: AchievementKind) -> String {
    format!("{}__{}", email, kind.as_str())
}

impl AchievementRepository {
    /// The achievements `email` has already claimed the reward for.
    pub async fn claimed_kinds(email: &str) -> Result<Vec<AchievementKind>, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("SELECT * FROM achievement_claim WHERE email = $email")
            .bind(("email", email.to_string()))
            .await?;

        let records: Vec<ClaimRecord> = result.take(0)?;

        Ok(records
            .into_iter()
            .filter_map(|r| AchievementKind::parse(&r.kind))
            .collect())
    }

    /// Record a reward claim. Fails if this badge was already claimed.
    pub async fn record_claim(email: &str, kind: AchievementKind) -> Result<(), DbError> {
        let db = get_db()?;
        let key = claim_key(email, kind);

        let existing: Option<ClaimRecord> =
            db.select(("achievement_claim", key.as_str())).await?;
        if existing.is_some() {
            return Err(DbError::InvalidState(format!(
                "Achievement {} already claimed by {}",
                kind.as_str(),
                email
            )));
        }

        let record: Option<ClaimRecord> = db
            .create(("achievement_claim", key.as_str()))
            .content(ClaimCreate {
                email: email.to_string(),
                kind: kind.as_str().to_string(),
            })
            .await?;

        record
            .map(|_| ())
            .ok_or_else(|| DbError::Query("Failed to record achievement claim".into()))
    }
}
