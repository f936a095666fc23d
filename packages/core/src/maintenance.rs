//! Maintenance mode domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single authoritative maintenance record.
///
/// Exactly one row exists; admin toggles update it in place and every update
/// is pushed to all subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceStatus {
    /// Whether maintenance mode is currently active.
    pub is_active: bool,
    /// Headline shown on the blocking overlay.
    pub message: String,
    /// Human-readable expected downtime, e.g. "30 minutes".
    pub expected_downtime: String,
    /// When the record was last toggled.
    pub updated_at: DateTime<Utc>,
}

impl Default for MaintenanceStatus {
    fn default() -> Self {
        Self {
            is_active: false,
            message: "UNDER MAINTENANCE".to_string(),
            expected_downtime: "30 minutes".to_string(),
            updated_at: Utc::now(),
        }
    }
}
