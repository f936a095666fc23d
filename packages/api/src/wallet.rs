//! Wallet and reward server functions.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use vault_core::Wallet;

/// Outcome of a prize wheel spin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinResult {
    /// Coins won on this spin.
    pub prize: i64,
    /// Wallet after the prize was credited.
    pub wallet: Wallet,
}

/// Get a user's wallet, creating it on first sight.
#[get("/api/wallet/:email")]
pub async fn get_wallet(email: String) -> Result<Wallet, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::WalletRepository;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        WalletRepository::get_or_create(&email)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load wallet: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Claim the daily reward. Fails if already claimed this UTC day.
#[post("/api/wallet/daily")]
pub async fn claim_daily(email: String) -> Result<Wallet, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::WalletRepository;
        use vault_core::{DAILY_REWARD_COINS, GrantReason, VaultEvent};

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let wallet = WalletRepository::get_or_create(&email)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load wallet: {}", e)))?;

        if !wallet.can_claim_daily(chrono::Utc::now()) {
            return Err(ServerFnError::new("Daily reward already claimed today"));
        }

        let wallet = WalletRepository::record_daily_claim(&email, DAILY_REWARD_COINS)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to claim daily reward: {}", e)))?;

        crate::publish_event(VaultEvent::CoinsGranted {
            email,
            amount: DAILY_REWARD_COINS,
            reason: GrantReason::DailyReward,
            timestamp: chrono::Utc::now(),
        });

        Ok(wallet)
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Credit the ad-watch reward.
#[post("/api/wallet/ad")]
pub async fn watch_ad(email: String) -> Result<Wallet, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::WalletRepository;
        use vault_core::{AD_REWARD_COINS, GrantReason, VaultEvent};

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        WalletRepository::get_or_create(&email)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load wallet: {}", e)))?;

        let wallet = WalletRepository::record_ad_watch(&email, AD_REWARD_COINS)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to credit ad reward: {}", e)))?;

        crate::publish_event(VaultEvent::CoinsGranted {
            email,
            amount: AD_REWARD_COINS,
            reason: GrantReason::AdWatch,
            timestamp: chrono::Utc::now(),
        });

        Ok(wallet)
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Manually grant coins to a user. Admin surface only.
#[post("/api/wallet/grant")]
pub async fn grant_coins(email: String, amount: i64) -> Result<Wallet, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::WalletRepository;
        use vault_core::{GrantReason, VaultEvent};

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        if amount <= 0 {
            return Err(ServerFnError::new("Grant amount must be positive"));
        }

        WalletRepository::get_or_create(&email)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load wallet: {}", e)))?;

        let wallet = WalletRepository::credit(&email, amount)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to grant coins: {}", e)))?;

        tracing::info!("Granted {} coins to {}", amount, email);

        crate::publish_event(VaultEvent::CoinsGranted {
            email,
            amount,
            reason: GrantReason::AdminGrant,
            timestamp: chrono::Utc::now(),
        });

        Ok(wallet)
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Spin the prize wheel: a weighted random coin prize, credited immediately.
#[post("/api/wallet/spin")]
pub async fn spin_wheel(email: String) -> Result<SpinResult, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::WalletRepository;
        use rand::Rng;
        use vault_core::{GrantReason, VaultEvent};

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        WalletRepository::get_or_create(&email)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load wallet: {}", e)))?;

        // Prize table: (coins, weight). Big prizes are rare.
        const PRIZES: [(i64, u32); 5] = [(50, 40), (100, 30), (250, 20), (500, 8), (1000, 2)];

        let total: u32 = PRIZES.iter().map(|(_, w)| w).sum();
        let mut roll = rand::thread_rng().gen_range(0..total);
        let mut prize = PRIZES[0].0;
        for (coins, weight) in PRIZES {
            if roll < weight {
                prize = coins;
                break;
            }
            roll -= weight;
        }

        let wallet = WalletRepository::credit(&email, prize)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to credit prize: {}", e)))?;

        crate::publish_event(VaultEvent::CoinsGranted {
            email,
            amount: prize,
            reason: GrantReason::WheelSpin,
            timestamp: chrono::Utc::now(),
        });

        Ok(SpinResult { prize, wallet })
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
