//! Rarity tiers shared by achievements and loot boxes.

use serde::{Deserialize, Serialize};

/// How rare a reward is. Styling and bragging rights only; drop odds and
/// payouts are set wherever the reward is defined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    /// Parse the lowercase tier name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "common" => Some(Rarity::Common),
            "rare" => Some(Rarity::Rare),
            "epic" => Some(Rarity::Epic),
            "legendary" => Some(Rarity::Legendary),
            _ => None,
        }
    }

    /// CSS class for rarity-tinted badges and cards.
    pub fn css_class(&self) -> &'static str {
        match self {
            Rarity::Common => "rarity-common",
            Rarity::Rare => "rarity-rare",
            Rarity::Epic => "rarity-epic",
            Rarity::Legendary => "rarity-legendary",
        }
    }

    /// Icon shown on loot box cards.
    pub fn icon(&self) -> &'static str {
        match self {
            Rarity::Common => "📦",
            Rarity::Rare => "💎",
            Rarity::Epic => "⭐",
            Rarity::Legendary => "👑",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
