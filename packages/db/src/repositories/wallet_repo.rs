//! Wallet repository for coin balance operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;
use vault_core::Wallet;

use crate::{DbError, get_db};

/// Repository for wallet persistence operations.
///
/// Wallets are keyed by the owner's email, one record per user.
pub struct WalletRepository;

/// Internal record type for SurrealDB reads.
#[derive(Debug, Deserialize)]
struct WalletRecord {
    #[allow(dead_code)]
    id: Option<Thing>,
    email: String,
    coins: i64,
    last_daily_claim: Option<DateTime<Utc>>,
    ads_watched_today: u32,
    last_ad_watch: Option<DateTime<Utc>>,
    total_ads_watched: u32,
    total_earned: i64,
    daily_claims: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WalletRecord {
    fn into_wallet(self) -> Wallet {
        Wallet {
            email: self.email,
            coins: self.coins,
            last_daily_claim: self.last_daily_claim,
            ads_watched_today: self.ads_watched_today,
            last_ad_watch: self.last_ad_watch,
            total_ads_watched: self.total_ads_watched,
            total_earned: self.total_earned,
            daily_claims: self.daily_claims,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Struct for creating wallets - omits datetime fields to use SurrealDB defaults.
#[derive(Debug, Clone, Serialize)]
struct WalletCreate {
    email: String,
    coins: i64,
    ads_watched_today: u32,
    total_ads_watched: u32,
    total_earned: i64,
    daily_claims: u32,
}

impl WalletRepository {
    /// Get a wallet by email.
    pub async fn get(email: &str) -> Result<Wallet, DbError> {
        let db = get_db()?;

        let record: Option<WalletRecord> = db.select(("wallet", email)).await?;

        record
            .map(WalletRecord::into_wallet)
            .ok_or_else(|| DbError::NotFound(format!("Wallet not found: {}", email)))
    }

    /// Get a wallet, creating an empty one on first sight of the email.
    pub async fn get_or_create(email: &str) -> Result<Wallet, DbError> {
        let db = get_db()?;

        let existing: Option<WalletRecord> = db.select(("wallet", email)).await?;
        if let Some(record) = existing {
            return Ok(record.into_wallet());
        }

        let record: Option<WalletRecord> = db
            .create(("wallet", email))
            .content(WalletCreate {
                email: email.to_string(),
                coins: 0,
                ads_watched_today: 0,
                total_ads_watched: 0,
                total_earned: 0,
                daily_claims: 0,
            })
            .await?;

        record
            .map(WalletRecord::into_wallet)
            .ok_or_else(|| DbError::Query("Failed to create wallet".into()))
    }

    /// Credit coins to a wallet.
    pub async fn credit(email: &str, amount: i64) -> Result<Wallet, DbError> {
        let db = get_db()?;

        let mut result = db
            .query(
                "UPDATE type::thing('wallet', $email) \
                 SET coins += $amount, total_earned += $amount, \
                     updated_at = time::now() RETURN AFTER",
            )
            .bind(("email", email.to_string()))
            .bind(("amount", amount))
            .await?;

        let records: Vec<WalletRecord> = result.take(0)?;

        records
            .into_iter()
            .next()
            .map(WalletRecord::into_wallet)
            .ok_or_else(|| DbError::NotFound(format!("Wallet not found: {}", email)))
    }

    /// Credit the daily reward and stamp the claim time.
    pub async fn record_daily_claim(email: &str, amount: i64) -> Result<Wallet, DbError> {
        let db = get_db()?;

        let mut result = db
            .query(
                "UPDATE type::thing('wallet', $email) \
                 SET coins += $amount, total_earned += $amount, \
                     daily_claims += 1, last_daily_claim = time::now(), \
                     updated_at = time::now() RETURN AFTER",
            )
            .bind(("email", email.to_string()))
            .bind(("amount", amount))
            .await?;

        let records: Vec<WalletRecord> = result.take(0)?;

        records
            .into_iter()
            .next()
            .map(WalletRecord::into_wallet)
            .ok_or_else(|| DbError::NotFound(format!("Wallet not found: {}", email)))
    }

    /// Credit an ad reward and bump the daily ad counter.
    ///
    /// The daily counter belongs to the UTC day of the last ad watch, so the
    /// stored value is replaced (not incremented) when that day has passed.
    pub async fn record_ad_watch(email: &str, amount: i64) -> Result<Wallet, DbError> {
        let db = get_db()?;

        let current = Self::get(email).await?;
        let today = current.ads_today(Utc::now()) + 1;

        let mut result = db
            .query(
                "UPDATE type::thing('wallet', $email) \
                 SET coins += $amount, total_earned += $amount, \
                     ads_watched_today = $today, total_ads_watched += 1, \
                     last_ad_watch = time::now(), \
                     updated_at = time::now() RETURN AFTER",
            )
            .bind(("email", email.to_string()))
            .bind(("amount", amount))
            .bind(("today", today))
            .await?;

        let records: Vec<WalletRecord> = result.take(0)?;

        records
            .into_iter()
            .next()
            .map(WalletRecord::into_wallet)
            .ok_or_else(|| DbError::NotFound(format!("Wallet not found: {}", email)))
    }
}
