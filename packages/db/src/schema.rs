//! Database schema definitions using SurrealQL.

use crate::{DbError, get_db};

/// Initialize the database schema.
///
/// This creates all necessary tables, fields, and indexes.
pub async fn init_schema() -> Result<(), DbError> {
    let db = get_db()?;

    tracing::info!("Initializing database schema...");

    db.query(BROADCAST_SCHEMA).await?;
    db.query(MAINTENANCE_SCHEMA).await?;
    db.query(ORDER_SCHEMA).await?;
    db.query(WALLET_SCHEMA).await?;
    db.query(MESSAGE_SCHEMA).await?;
    db.query(LOOT_SCHEMA).await?;
    db.query(ACHIEVEMENT_SCHEMA).await?;
    db.query(SETTINGS_SCHEMA).await?;

    tracing::info!("Database schema initialized");

    Ok(())
}

/// Broadcast table schema.
const BROADCAST_SCHEMA: &str = r#"
-- Broadcasts: admin announcements shown full-screen to clients
DEFINE TABLE IF NOT EXISTS broadcast SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS title ON broadcast TYPE string;
DEFINE FIELD IF NOT EXISTS message ON broadcast TYPE string;
DEFINE FIELD IF NOT EXISTS priority ON broadcast TYPE string DEFAULT "normal";
DEFINE FIELD IF NOT EXISTS is_active ON broadcast TYPE bool DEFAULT true;
DEFINE FIELD IF NOT EXISTS created_at ON broadcast TYPE datetime DEFAULT time::now();

-- The reveal path always asks for the newest active row
DEFINE INDEX IF NOT EXISTS broadcast_active ON broadcast FIELDS is_active;
DEFINE INDEX IF NOT EXISTS broadcast_created ON broadcast FIELDS created_at;
"#;

/// Maintenance table schema (single authoritative row).
const MAINTENANCE_SCHEMA: &str = r#"
-- Maintenance mode: exactly one row, keyed "current", updated in place
DEFINE TABLE IF NOT EXISTS maintenance SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS is_active ON maintenance TYPE bool DEFAULT false;
DEFINE FIELD IF NOT EXISTS message ON maintenance TYPE string;
DEFINE FIELD IF NOT EXISTS expected_downtime ON maintenance TYPE string;
DEFINE FIELD IF NOT EXISTS updated_at ON maintenance TYPE datetime DEFAULT time::now();
"#;

/// Shop order table schema.
const ORDER_SCHEMA: &str = r#"
-- Shop orders awaiting admin approval
DEFINE TABLE IF NOT EXISTS shop_order SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS email ON shop_order TYPE string;
DEFINE FIELD IF NOT EXISTS package_coins ON shop_order TYPE int;
DEFINE FIELD IF NOT EXISTS player_name ON shop_order TYPE string;
DEFINE FIELD IF NOT EXISTS rating ON shop_order TYPE int;
DEFINE FIELD IF NOT EXISTS buy_now_price ON shop_order TYPE int;
DEFINE FIELD IF NOT EXISTS instructions ON shop_order TYPE option<string>;
DEFINE FIELD IF NOT EXISTS status ON shop_order TYPE string DEFAULT "pending";
DEFINE FIELD IF NOT EXISTS created_at ON shop_order TYPE datetime DEFAULT time::now();
DEFINE FIELD IF NOT EXISTS updated_at ON shop_order TYPE datetime DEFAULT time::now();

DEFINE INDEX IF NOT EXISTS order_email ON shop_order FIELDS email;
DEFINE INDEX IF NOT EXISTS order_status ON shop_order FIELDS status;
DEFINE INDEX IF NOT EXISTS order_created ON shop_order FIELDS created_at;
"#;

/// Wallet table schema.
const WALLET_SCHEMA: &str = r#"
-- Wallets: one per user, keyed by email; lifetime counters feed achievements
DEFINE TABLE IF NOT EXISTS wallet SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS email ON wallet TYPE string;
DEFINE FIELD IF NOT EXISTS coins ON wallet TYPE int DEFAULT 0;
DEFINE FIELD IF NOT EXISTS last_daily_claim ON wallet TYPE option<datetime>;
DEFINE FIELD IF NOT EXISTS ads_watched_today ON wallet TYPE int DEFAULT 0;
DEFINE FIELD IF NOT EXISTS last_ad_watch ON wallet TYPE option<datetime>;
DEFINE FIELD IF NOT EXISTS total_ads_watched ON wallet TYPE int DEFAULT 0;
DEFINE FIELD IF NOT EXISTS total_earned ON wallet TYPE int DEFAULT 0;
DEFINE FIELD IF NOT EXISTS daily_claims ON wallet TYPE int DEFAULT 0;
DEFINE FIELD IF NOT EXISTS created_at ON wallet TYPE datetime DEFAULT time::now();
DEFINE FIELD IF NOT EXISTS updated_at ON wallet TYPE datetime DEFAULT time::now();

DEFINE INDEX IF NOT EXISTS wallet_email ON wallet FIELDS email UNIQUE;
"#;

/// Dashboard message table schema.
const MESSAGE_SCHEMA: &str = r#"
-- Messages: global dashboard announcements, newest first
DEFINE TABLE IF NOT EXISTS message SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS kind ON message TYPE string DEFAULT "system";
DEFINE FIELD IF NOT EXISTS title ON message TYPE string;
DEFINE FIELD IF NOT EXISTS body ON message TYPE string;
DEFINE FIELD IF NOT EXISTS created_at ON message TYPE datetime DEFAULT time::now();

DEFINE INDEX IF NOT EXISTS message_created ON message FIELDS created_at;
"#;

/// Loot box and per-user claim schemas.
const LOOT_SCHEMA: &str = r#"
-- Loot boxes: admin coin drops; a missing recipient means "all users"
DEFINE TABLE IF NOT EXISTS loot_box SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS name ON loot_box TYPE string;
DEFINE FIELD IF NOT EXISTS description ON loot_box TYPE string;
DEFINE FIELD IF NOT EXISTS rarity ON loot_box TYPE string DEFAULT "common";
DEFINE FIELD IF NOT EXISTS coins ON loot_box TYPE int;
DEFINE FIELD IF NOT EXISTS contents ON loot_box TYPE array<string> DEFAULT [];
DEFINE FIELD IF NOT EXISTS recipient ON loot_box TYPE option<string>;
DEFINE FIELD IF NOT EXISTS created_at ON loot_box TYPE datetime DEFAULT time::now();

DEFINE INDEX IF NOT EXISTS loot_recipient ON loot_box FIELDS recipient;

-- One claim row per (box, user); the record key enforces exactly-once opens
DEFINE TABLE IF NOT EXISTS loot_claim SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS box_id ON loot_claim TYPE string;
DEFINE FIELD IF NOT EXISTS email ON loot_claim TYPE string;
DEFINE FIELD IF NOT EXISTS opened_at ON loot_claim TYPE datetime DEFAULT time::now();

DEFINE INDEX IF NOT EXISTS loot_claim_email ON loot_claim FIELDS email;
"#;

/// Achievement reward claim schema.
const ACHIEVEMENT_SCHEMA: &str = r#"
-- Achievement claims: progress is derived from the wallet, only the claimed
-- reward is recorded; the record key enforces one claim per (user, badge)
DEFINE TABLE IF NOT EXISTS achievement_claim SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS email ON achievement_claim TYPE string;
DEFINE FIELD IF NOT EXISTS kind ON achievement_claim TYPE string;
DEFINE FIELD IF NOT EXISTS claimed_at ON achievement_claim TYPE datetime DEFAULT time::now();

DEFINE INDEX IF NOT EXISTS achievement_email ON achievement_claim FIELDS email;
"#;

/// Site settings schema (single authoritative row, like maintenance).
const SETTINGS_SCHEMA: &str = r#"
-- Site settings: exactly one row, keyed "current", updated in place
DEFINE TABLE IF NOT EXISTS site_settings SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS theme ON site_settings TYPE string DEFAULT "classic";
DEFINE FIELD IF NOT EXISTS updated_at ON site_settings TYPE datetime DEFAULT time::now();
"#;
