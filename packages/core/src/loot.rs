//! Loot boxes: admin-authored coin drops users open from their vault.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::Rarity;

/// Unique identifier for a loot box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LootBoxId(pub Ulid);

impl LootBoxId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn parse(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for LootBoxId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LootBoxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A coin drop created by the admin.
///
/// A box is addressed either to one user or to everyone; each eligible user
/// may open it exactly once, which credits the coins to their wallet. The
/// box itself is never mutated by an open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootBox {
    pub id: LootBoxId,
    /// Display name, e.g. "Weekend Bonus Crate".
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    /// Coins credited on open.
    pub coins: i64,
    /// Cosmetic list of what the drop "contains".
    pub contents: Vec<String>,
    /// Addressee email; `None` sends the box to every user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LootBox {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        rarity: Rarity,
        coins: i64,
        contents: Vec<String>,
        recipient: Option<String>,
    ) -> Self {
        Self {
            id: LootBoxId::new(),
            name: name.into(),
            description: description.into(),
            rarity,
            coins,
            contents,
            recipient,
            created_at: Utc::now(),
        }
    }

    /// Whether `email` is allowed to open this box.
    pub fn addressed_to(&self, email: &str) -> bool {
        match &self.recipient {
            None => true,
            Some(target) => target == email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_box_is_addressed_to_everyone() {
        let lootbox = LootBox::new("Crate", "For all", Rarity::Common, 100, vec![], None);
        assert!(lootbox.addressed_to("anyone@example.com"));
    }

    #[test]
    fn targeted_box_is_addressed_to_one_user() {
        let lootbox = LootBox::new(
            "VIP Crate",
            "Just for you",
            Rarity::Legendary,
            5_000,
            vec!["5000 coins".to_string()],
            Some("vip@example.com".to_string()),
        );
        assert!(lootbox.addressed_to("vip@example.com"));
        assert!(!lootbox.addressed_to("other@example.com"));
    }
}
