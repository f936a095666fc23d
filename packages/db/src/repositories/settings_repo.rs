//! Site settings repository for the single authoritative settings row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;
use vault_core::Theme;

use crate::{DbError, get_db};

/// Fixed record key for the singleton row.
const RECORD_KEY: &str = "current";

/// Repository for the site settings record. Currently the settings hold
/// only the active theme.
pub struct SettingsRepository;

/// Internal record type for SurrealDB reads.
#[derive(Debug, Deserialize)]
struct SettingsRecord {
    #[allow(dead_code)]
    id: Option<Thing>,
    theme: String,
    #[allow(dead_code)]
    updated_at: DateTime<Utc>,
}

impl SettingsRecord {
    fn into_theme(self) -> Theme {
        // An unrecognized stored value falls back to the default theme
        // rather than failing every page load.
        Theme::parse(&self.theme).unwrap_or_default()
    }
}

/// Struct for seeding the row - omits the datetime field to use the SurrealDB default.
#[derive(Debug, Clone, Serialize)]
struct SettingsCreate {
    theme: String,
}

impl SettingsRepository {
    /// Seed the singleton row if it does not exist yet, and return the theme.
    pub async fn ensure_exists() -> Result<Theme, DbError> {
        let db = get_db()?;

        let existing: Option<SettingsRecord> = db.select(("site_settings", RECORD_KEY)).await?;
        if let Some(record) = existing {
            return Ok(record.into_theme());
        }

        let record: Option<SettingsRecord> = db
            .create(("site_settings", RECORD_KEY))
            .content(SettingsCreate {
                theme: Theme::default().as_str().to_string(),
            })
            .await?;

        record
            .map(SettingsRecord::into_theme)
            .ok_or_else(|| DbError::Query("Failed to seed settings record".into()))
    }

    /// Get the active theme.
    pub async fn get_theme() -> Result<Theme, DbError> {
        let db = get_db()?;

        let record: Option<SettingsRecord> = db.select(("site_settings", RECORD_KEY)).await?;

        record
            .map(SettingsRecord::into_theme)
            .ok_or_else(|| DbError::NotFound("Settings record not seeded".into()))
    }

    /// Switch the active theme in place (update, never insert).
    pub async fn set_theme(theme: Theme) -> Result<Theme, DbError> {
        let db = get_db()?;

        let mut result = db
            .query(
                "UPDATE type::thing('site_settings', $key) \
                 SET theme = $theme, updated_at = time::now() RETURN AFTER",
            )
            .bind(("key", RECORD_KEY))
            .bind(("theme", theme.as_str()))
            .await?;

        let records: Vec<SettingsRecord> = result.take(0)?;

        records
            .into_iter()
            .next()
            .map(SettingsRecord::into_theme)
            .ok_or_else(|| DbError::NotFound("Settings record not seeded".into()))
    }
}
