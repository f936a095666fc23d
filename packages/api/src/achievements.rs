//! Achievement server functions.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use vault_core::{Achievement, Wallet};

/// An achievement together with this user's claim state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementStatus {
    pub achievement: Achievement,
    /// Whether the reward was already paid out.
    pub claimed: bool,
}

/// Evaluate the achievement catalog for a user.
#[get("/api/achievements/:email")]
pub async fn list_achievements(email: String) -> Result<Vec<AchievementStatus>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::{AchievementRepository, WalletRepository};

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let wallet = WalletRepository::get_or_create(&email)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load wallet: {}", e)))?;

        let claimed = AchievementRepository::claimed_kinds(&email)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load claims: {}", e)))?;

        Ok(Achievement::evaluate_all(&wallet)
            .into_iter()
            .map(|achievement| AchievementStatus {
                claimed: claimed.contains(&achievement.kind),
                achievement,
            })
            .collect())
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Claim the reward of a completed achievement. One claim per badge.
#[post("/api/achievements/claim")]
pub async fn claim_achievement(email: String, kind: String) -> Result<Wallet, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::{AchievementRepository, WalletRepository};
        use vault_core::{AchievementKind, GrantReason, VaultEvent};

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let Some(kind) = AchievementKind::parse(&kind) else {
            return Err(ServerFnError::new(format!("Unknown achievement: {}", kind)));
        };

        let wallet = WalletRepository::get_or_create(&email)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load wallet: {}", e)))?;

        let completed = Achievement::evaluate_all(&wallet)
            .into_iter()
            .any(|a| a.kind == kind && a.completed);
        if !completed {
            return Err(ServerFnError::new("Achievement not completed yet"));
        }

        // Recording the claim first makes the payout exactly-once; a repeat
        // claim fails here before any coins move.
        AchievementRepository::record_claim(&email, kind)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to claim achievement: {}", e)))?;

        let amount = kind.reward();
        let wallet = WalletRepository::credit(&email, amount)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to credit reward: {}", e)))?;

        tracing::info!("Achievement {} claimed by {}", kind.as_str(), email);

        crate::publish_event(VaultEvent::CoinsGranted {
            email,
            amount,
            reason: GrantReason::AchievementReward,
            timestamp: chrono::Utc::now(),
        });

        Ok(wallet)
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
