//! Site-wide seasonal themes, switched by the admin.

use serde::{Deserialize, Serialize};

/// The selectable site themes. Exactly one is active for everyone; the
/// admin switches it and every client restyles on the change event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Classic,
    Christmas,
    Halloween,
    Valentine,
    Summer,
    Cyber,
}

impl Theme {
    /// Every theme, in display order.
    pub const ALL: [Theme; 6] = [
        Theme::Classic,
        Theme::Christmas,
        Theme::Halloween,
        Theme::Valentine,
        Theme::Summer,
        Theme::Cyber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Christmas => "christmas",
            Theme::Halloween => "halloween",
            Theme::Valentine => "valentine",
            Theme::Summer => "summer",
            Theme::Cyber => "cyber",
        }
    }

    /// Parse the lowercase theme id.
    pub fn parse(s: &str) -> Option<Self> {
        Theme::ALL.into_iter().find(|t| t.as_str() == s)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Classic => "VaultFUT Classic",
            Theme::Christmas => "XMAS Mode",
            Theme::Halloween => "Halloween Mode",
            Theme::Valentine => "Valentine Mode",
            Theme::Summer => "Summer Vibes",
            Theme::Cyber => "Cyber Mode",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Theme::Classic => "Original dark vault theme with gold accents",
            Theme::Christmas => "Festive Christmas theme with snow and gifts",
            Theme::Halloween => "Spooky Halloween theme with pumpkins and ghosts",
            Theme::Valentine => "Romantic theme with hearts and pink colors",
            Theme::Summer => "Bright summer theme with sun and fireworks",
            Theme::Cyber => "Futuristic cyberpunk theme with neon effects",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Classic => "🏦",
            Theme::Christmas => "🎄",
            Theme::Halloween => "🎃",
            Theme::Valentine => "💝",
            Theme::Summer => "☀️",
            Theme::Cyber => "⚡",
        }
    }

    /// CSS class applied to the app root while this theme is active.
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Classic => "theme-classic",
            Theme::Christmas => "theme-christmas",
            Theme::Halloween => "theme-halloween",
            Theme::Valentine => "theme-valentine",
            Theme::Summer => "theme-summer",
            Theme::Cyber => "theme-cyber",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_ids_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("vaporwave"), None);
    }

    #[test]
    fn default_theme_is_classic() {
        assert_eq!(Theme::default(), Theme::Classic);
    }
}
