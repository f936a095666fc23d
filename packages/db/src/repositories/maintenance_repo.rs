//! Maintenance repository for the single authoritative maintenance row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;
use vault_core::MaintenanceStatus;

use crate::{DbError, get_db};

/// Fixed record key for the singleton row.
const RECORD_KEY: &str = "current";

/// Repository for the maintenance mode record.
pub struct MaintenanceRepository;

/// Internal record type for SurrealDB reads.
#[derive(Debug, Deserialize)]
struct MaintenanceRecord {
    #[allow(dead_code)]
    id: Option<Thing>,
    is_active: bool,
    message: String,
    expected_downtime: String,
    updated_at: DateTime<Utc>,
}

impl MaintenanceRecord {
    fn into_status(self) -> MaintenanceStatus {
        MaintenanceStatus {
            is_active: self.is_active,
            message: self.message,
            expected_downtime: self.expected_downtime,
            updated_at: self.updated_at,
        }
    }
}

/// Struct for seeding the row - omits the datetime field to use the SurrealDB default.
#[derive(Debug, Clone, Serialize)]
struct MaintenanceCreate {
    is_active: bool,
    message: String,
    expected_downtime: String,
}

impl MaintenanceRepository {
    /// Seed the singleton row if it does not exist yet, and return it.
    pub async fn ensure_exists() -> Result<MaintenanceStatus, DbError> {
        let db = get_db()?;

        let existing: Option<MaintenanceRecord> = db.select(("maintenance", RECORD_KEY)).await?;
        if let Some(record) = existing {
            return Ok(record.into_status());
        }

        let defaults = MaintenanceStatus::default();
        let record: Option<MaintenanceRecord> = db
            .create(("maintenance", RECORD_KEY))
            .content(MaintenanceCreate {
                is_active: defaults.is_active,
                message: defaults.message,
                expected_downtime: defaults.expected_downtime,
            })
            .await?;

        record
            .map(MaintenanceRecord::into_status)
            .ok_or_else(|| DbError::Query("Failed to seed maintenance record".into()))
    }

    /// Get the current maintenance status.
    pub async fn get() -> Result<MaintenanceStatus, DbError> {
        let db = get_db()?;

        let record: Option<MaintenanceRecord> = db.select(("maintenance", RECORD_KEY)).await?;

        record
            .map(MaintenanceRecord::into_status)
            .ok_or_else(|| DbError::NotFound("Maintenance record not seeded".into()))
    }

    /// Toggle the maintenance record in place (update, never insert).
    pub async fn set(
        is_active: bool,
        message: impl Into<String>,
        expected_downtime: impl Into<String>,
    ) -> Result<MaintenanceStatus, DbError> {
        let db = get_db()?;

        let mut result = db
            .query(
                "UPDATE type::thing('maintenance', $key) \
                 SET is_active = $is_active, message = $message, \
                     expected_downtime = $expected_downtime, updated_at = time::now() \
                 RETURN AFTER",
            )
            .bind(("key", RECORD_KEY))
            .bind(("is_active", is_active))
            .bind(("message", message.into()))
            .bind(("expected_downtime", expected_downtime.into()))
            .await?;

        let records: Vec<MaintenanceRecord> = result.take(0)?;

        records
            .into_iter()
            .next()
            .map(MaintenanceRecord::into_status)
            .ok_or_else(|| DbError::NotFound("Maintenance record not seeded".into()))
    }
}
