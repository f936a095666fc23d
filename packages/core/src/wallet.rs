//! Wallet domain types for site coin balances.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Coins granted by the once-per-day reward.
pub const DAILY_REWARD_COINS: i64 = 500;

/// Coins granted per watched ad.
pub const AD_REWARD_COINS: i64 = 100;

/// A per-user coin balance.
///
/// Besides the spendable balance, the wallet carries lifetime counters
/// (total ads watched, total coins earned, daily claims) that achievement
/// progress is derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// Owner's email, also the record key.
    pub email: String,
    /// Current site coin balance.
    pub coins: i64,
    /// When the daily reward was last claimed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_daily_claim: Option<DateTime<Utc>>,
    /// Ads credited on the UTC day of `last_ad_watch`. Stale once that day
    /// has passed; read it through [`ads_today`](Self::ads_today).
    pub ads_watched_today: u32,
    /// When an ad reward was last credited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_ad_watch: Option<DateTime<Utc>>,
    /// Lifetime count of credited ad watches.
    pub total_ads_watched: u32,
    /// Lifetime sum of all coins ever credited.
    pub total_earned: i64,
    /// Lifetime count of daily reward claims.
    pub daily_claims: u32,
    /// When the wallet was created.
    pub created_at: DateTime<Utc>,
    /// When the wallet was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Wallet {
    /// Create a new empty wallet.
    pub fn new(email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            email: email.into(),
            coins: 0,
            last_daily_claim: None,
            ads_watched_today: 0,
            last_ad_watch: None,
            total_ads_watched: 0,
            total_earned: 0,
            daily_claims: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the daily reward can be claimed at `now`.
    ///
    /// The claim window resets at UTC midnight, not 24 hours after the last
    /// claim.
    pub fn can_claim_daily(&self, now: DateTime<Utc>) -> bool {
        match self.last_daily_claim {
            None => true,
            Some(last) => !same_utc_day(last, now),
        }
    }

    /// Ads credited on the UTC day containing `now`.
    ///
    /// The stored counter belongs to the day of the last ad watch; once UTC
    /// midnight passes it no longer counts toward "today".
    pub fn ads_today(&self, now: DateTime<Utc>) -> u32 {
        match self.last_ad_watch {
            Some(last) if same_utc_day(last, now) => self.ads_watched_today,
            _ => 0,
        }
    }
}

fn same_utc_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.year() == b.year() && a.ordinal() == b.ordinal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fresh_wallet_can_claim() {
        let wallet = Wallet::new("player@example.com");
        assert!(wallet.can_claim_daily(Utc::now()));
    }

    #[test]
    fn claim_resets_at_utc_midnight() {
        let mut wallet = Wallet::new("player@example.com");
        let evening = Utc.with_ymd_and_hms(2025, 6, 1, 23, 50, 0).unwrap();
        wallet.last_daily_claim = Some(evening);

        let same_day = Utc.with_ymd_and_hms(2025, 6, 1, 23, 59, 0).unwrap();
        assert!(!wallet.can_claim_daily(same_day));

        let next_morning = Utc.with_ymd_and_hms(2025, 6, 2, 0, 5, 0).unwrap();
        assert!(wallet.can_claim_daily(next_morning));
    }

    #[test]
    fn ad_counter_resets_at_utc_midnight() {
        let mut wallet = Wallet::new("player@example.com");
        let evening = Utc.with_ymd_and_hms(2025, 6, 1, 22, 0, 0).unwrap();
        wallet.ads_watched_today = 7;
        wallet.last_ad_watch = Some(evening);

        let same_day = Utc.with_ymd_and_hms(2025, 6, 1, 23, 59, 0).unwrap();
        assert_eq!(wallet.ads_today(same_day), 7);

        let next_morning = Utc.with_ymd_and_hms(2025, 6, 2, 0, 1, 0).unwrap();
        assert_eq!(wallet.ads_today(next_morning), 0);
    }

    #[test]
    fn never_watched_means_zero_today() {
        let wallet = Wallet::new("player@example.com");
        assert_eq!(wallet.ads_today(Utc::now()), 0);
    }
}
