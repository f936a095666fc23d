//! Dashboard messages: announcements and event notices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a message. ULIDs order by creation time, so the
/// client-side "last read" marker is a single id compared lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub Ulid);

impl MessageId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn parse(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What kind of notice a message is; selects the icon and tint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Limited-time event announcement.
    Event,
    /// Housekeeping notice from the site itself.
    #[default]
    System,
    /// Mirror of an admin broadcast, kept for readers who missed the reveal.
    Broadcast,
    /// Something the user should act on.
    Warning,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Event => "event",
            MessageKind::System => "system",
            MessageKind::Broadcast => "broadcast",
            MessageKind::Warning => "warning",
        }
    }

    /// Parse the lowercase kind name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "event" => Some(MessageKind::Event),
            "system" => Some(MessageKind::System),
            "broadcast" => Some(MessageKind::Broadcast),
            "warning" => Some(MessageKind::Warning),
            _ => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MessageKind::Event => "🎁",
            MessageKind::System => "🔔",
            MessageKind::Broadcast => "📣",
            MessageKind::Warning => "⚠️",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Event => "msg-event",
            MessageKind::System => "msg-system",
            MessageKind::Broadcast => "msg-broadcast",
            MessageKind::Warning => "msg-warning",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A dashboard message shown to every user.
///
/// Messages are global announcements; whether one reads as "new" is decided
/// per client by comparing its id to a stored last-read marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub kind: MessageKind,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(kind: MessageKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            kind,
            title: title.into(),
            body: body.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_order_by_creation() {
        let first = MessageId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = MessageId::new();
        assert!(second > first);
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in [
            MessageKind::Event,
            MessageKind::System,
            MessageKind::Broadcast,
            MessageKind::Warning,
        ] {
            assert_eq!(MessageKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(MessageKind::parse("gossip"), None);
    }
}
