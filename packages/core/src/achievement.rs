//! Achievement catalog and progress evaluation.
//!
//! Achievements are not stored rows; progress is derived from the lifetime
//! counters on the [`Wallet`]. Only the claim of a completed achievement's
//! reward is persisted, so evaluation stays a pure function.

use serde::{Deserialize, Serialize};

use crate::{Rarity, Wallet};

/// The fixed achievement catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    FirstSteps,
    AdWatcher,
    DedicatedViewer,
    CoinCollector,
    DailyGrinder,
    VaultMaster,
}

impl AchievementKind {
    /// Every achievement, in display order. `VaultMaster` is last because
    /// its progress is the completion count of the others.
    pub const ALL: [AchievementKind; 6] = [
        AchievementKind::FirstSteps,
        AchievementKind::AdWatcher,
        AchievementKind::DedicatedViewer,
        AchievementKind::CoinCollector,
        AchievementKind::DailyGrinder,
        AchievementKind::VaultMaster,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementKind::FirstSteps => "first_steps",
            AchievementKind::AdWatcher => "ad_watcher",
            AchievementKind::DedicatedViewer => "dedicated_viewer",
            AchievementKind::CoinCollector => "coin_collector",
            AchievementKind::DailyGrinder => "daily_grinder",
            AchievementKind::VaultMaster => "vault_master",
        }
    }

    /// Parse the snake_case id.
    pub fn parse(s: &str) -> Option<Self> {
        AchievementKind::ALL.into_iter().find(|k| k.as_str() == s)
    }

    pub fn name(&self) -> &'static str {
        match self {
            AchievementKind::FirstSteps => "First Steps",
            AchievementKind::AdWatcher => "Ad Watcher",
            AchievementKind::DedicatedViewer => "Dedicated Viewer",
            AchievementKind::CoinCollector => "Coin Collector",
            AchievementKind::DailyGrinder => "Daily Grinder",
            AchievementKind::VaultMaster => "Vault Master",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AchievementKind::FirstSteps => "Watch your first ad",
            AchievementKind::AdWatcher => "Watch 10 ads",
            AchievementKind::DedicatedViewer => "Watch 50 ads",
            AchievementKind::CoinCollector => "Earn 10,000 coins total",
            AchievementKind::DailyGrinder => "Claim daily rewards for 7 days",
            AchievementKind::VaultMaster => "Complete all other achievements",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AchievementKind::FirstSteps | AchievementKind::AdWatcher => "👁️",
            AchievementKind::DedicatedViewer => "🎯",
            AchievementKind::CoinCollector => "🏆",
            AchievementKind::DailyGrinder => "⭐",
            AchievementKind::VaultMaster => "⚡",
        }
    }

    pub fn rarity(&self) -> Rarity {
        match self {
            AchievementKind::FirstSteps | AchievementKind::AdWatcher => Rarity::Common,
            AchievementKind::DedicatedViewer => Rarity::Rare,
            AchievementKind::CoinCollector => Rarity::Epic,
            AchievementKind::DailyGrinder | AchievementKind::VaultMaster => Rarity::Legendary,
        }
    }

    /// Progress target.
    pub fn goal(&self) -> u64 {
        match self {
            AchievementKind::FirstSteps => 1,
            AchievementKind::AdWatcher => 10,
            AchievementKind::DedicatedViewer => 50,
            AchievementKind::CoinCollector => 10_000,
            AchievementKind::DailyGrinder => 7,
            AchievementKind::VaultMaster => 5,
        }
    }

    /// Coins paid out when the completed achievement is claimed.
    pub fn reward(&self) -> i64 {
        match self {
            AchievementKind::FirstSteps => 100,
            AchievementKind::AdWatcher => 500,
            AchievementKind::DedicatedViewer => 2_000,
            AchievementKind::CoinCollector => 1_000,
            AchievementKind::DailyGrinder => 5_000,
            AchievementKind::VaultMaster => 10_000,
        }
    }

    fn counter(&self, wallet: &Wallet) -> u64 {
        match self {
            AchievementKind::FirstSteps
            | AchievementKind::AdWatcher
            | AchievementKind::DedicatedViewer => u64::from(wallet.total_ads_watched),
            AchievementKind::CoinCollector => wallet.total_earned.max(0) as u64,
            AchievementKind::DailyGrinder => u64::from(wallet.daily_claims),
            // Derived from the others; see `Achievement::evaluate_all`.
            AchievementKind::VaultMaster => 0,
        }
    }
}

/// An achievement with progress evaluated against one wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub kind: AchievementKind,
    /// Current progress, clamped to the goal.
    pub progress: u64,
    pub goal: u64,
    pub reward: i64,
    pub rarity: Rarity,
    pub completed: bool,
}

impl Achievement {
    fn from_counter(kind: AchievementKind, counter: u64) -> Self {
        let goal = kind.goal();
        Self {
            kind,
            progress: counter.min(goal),
            goal,
            reward: kind.reward(),
            rarity: kind.rarity(),
            completed: counter >= goal,
        }
    }

    /// Evaluate the whole catalog against a wallet's lifetime counters.
    pub fn evaluate_all(wallet: &Wallet) -> Vec<Achievement> {
        let mut list: Vec<Achievement> = AchievementKind::ALL
            .into_iter()
            .filter(|k| *k != AchievementKind::VaultMaster)
            .map(|k| Achievement::from_counter(k, k.counter(wallet)))
            .collect();

        let completed = list.iter().filter(|a| a.completed).count() as u64;
        list.push(Achievement::from_counter(
            AchievementKind::VaultMaster,
            completed,
        ));
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_wallet_has_no_progress() {
        let all = Achievement::evaluate_all(&Wallet::new("new@example.com"));
        assert_eq!(all.len(), AchievementKind::ALL.len());
        assert!(all.iter().all(|a| !a.completed && a.progress == 0));
    }

    #[test]
    fn ad_milestones_track_lifetime_counter() {
        let mut wallet = Wallet::new("player@example.com");
        wallet.total_ads_watched = 12;

        let all = Achievement::evaluate_all(&wallet);
        let find = |kind| all.iter().find(|a| a.kind == kind).unwrap();

        assert!(find(AchievementKind::FirstSteps).completed);
        assert!(find(AchievementKind::AdWatcher).completed);

        let dedicated = find(AchievementKind::DedicatedViewer);
        assert!(!dedicated.completed);
        assert_eq!(dedicated.progress, 12);
    }

    #[test]
    fn progress_is_clamped_to_goal() {
        let mut wallet = Wallet::new("player@example.com");
        wallet.total_ads_watched = 500;

        let all = Achievement::evaluate_all(&wallet);
        let watcher = all
            .iter()
            .find(|a| a.kind == AchievementKind::AdWatcher)
            .unwrap();
        assert_eq!(watcher.progress, watcher.goal);
    }

    #[test]
    fn vault_master_counts_completed_peers() {
        let mut wallet = Wallet::new("player@example.com");
        wallet.total_ads_watched = 50;
        wallet.total_earned = 10_000;
        wallet.daily_claims = 7;

        let all = Achievement::evaluate_all(&wallet);
        let master = all
            .iter()
            .find(|a| a.kind == AchievementKind::VaultMaster)
            .unwrap();
        assert!(master.completed);
        assert_eq!(master.progress, 5);
    }

    #[test]
    fn kind_ids_round_trip() {
        for kind in AchievementKind::ALL {
            assert_eq!(AchievementKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(AchievementKind::parse("no_such_badge"), None);
    }
}
