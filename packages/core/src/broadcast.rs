//! Broadcast domain types for admin announcements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a broadcast, using ULID for chronological sorting.
///
/// The "latest active broadcast" query relies on ULIDs ordering by creation
/// time, so ids double as a creation-order key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BroadcastId(pub Ulid);

impl BroadcastId {
    /// Create a new unique broadcast ID.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Parse a broadcast ID from a string.
    pub fn parse(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for BroadcastId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BroadcastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Priority level for a broadcast.
///
/// Priority only selects visual styling; it never changes reveal timing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    Critical,
}

impl Priority {
    /// Visual styling for the alert phase of a reveal.
    pub fn style(self) -> PriorityStyle {
        match self {
            Priority::Critical => PriorityStyle {
                css_class: "alert-critical",
                label: "CRITICAL ALERT!",
                icon: "🚨",
            },
            Priority::Normal => PriorityStyle {
                css_class: "alert-normal",
                label: "ATTENTION USERS!",
                icon: "⚠️",
            },
            Priority::Low => PriorityStyle {
                css_class: "alert-low",
                label: "INFORMATION",
                icon: "ℹ️",
            },
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Normal => write!(f, "normal"),
            Priority::Critical => write!(f, "critical"),
        }
    }
}

/// Styling configuration for a priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityStyle {
    /// CSS class applied to the alert banner.
    pub css_class: &'static str,
    /// Attention text shown during the alert phase.
    pub label: &'static str,
    /// Icon shown next to the attention text.
    pub icon: &'static str,
}

/// An admin-authored announcement shown full-screen to connected clients.
///
/// Broadcasts are never mutated after creation; deactivation happens by
/// newer broadcasts superseding them in the "latest active" query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Broadcast {
    /// Unique identifier, monotone by creation order.
    pub id: BroadcastId,
    /// Short headline shown in the message phase.
    pub title: String,
    /// Full message body.
    pub message: String,
    /// Visual priority level.
    pub priority: Priority,
    /// Whether the broadcast is eligible for display.
    pub is_active: bool,
    /// When the broadcast was created.
    pub created_at: DateTime<Utc>,
}

impl Broadcast {
    /// Create a new active broadcast.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: BroadcastId::new(),
            title: title.into(),
            message: message.into(),
            priority,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_order_by_creation() {
        let first = BroadcastId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = BroadcastId::new();
        assert!(second > first);
    }

    #[test]
    fn priority_styles_are_distinct() {
        let classes = [
            Priority::Low.style().css_class,
            Priority::Normal.style().css_class,
            Priority::Critical.style().css_class,
        ];
        assert_eq!(classes.len(), 3);
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
    }

    #[test]
    fn priority_serializes_lowercase() {
        let json = serde_json::to_string(&Priority::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let parsed: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, Priority::Low);
    }
}
