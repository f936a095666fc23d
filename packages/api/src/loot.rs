//! Loot box server functions.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use vault_core::{LootBox, Wallet};

/// Outcome of opening a loot box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenLootResult {
    /// The box that was opened.
    pub loot_box: LootBox,
    /// Wallet after the coins were credited.
    pub wallet: Wallet,
}

/// Create a loot box and drop it to one user or to everyone. Admin surface only.
#[post("/api/loot/create")]
pub async fn create_loot_box(
    name: String,
    description: String,
    rarity: String,
    coins: i64,
    contents: String,
    recipient: Option<String>,
) -> Result<LootBox, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::LootRepository;
        use vault_core::{Rarity, VaultEvent};

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        if name.trim().is_empty() || description.trim().is_empty() {
            return Err(ServerFnError::new("Name and description are required"));
        }
        if coins <= 0 {
            return Err(ServerFnError::new("Coin amount must be positive"));
        }

        let rarity = Rarity::parse(&rarity).unwrap_or_default();
        let contents: Vec<String> = contents
            .split(',')
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();
        let recipient = recipient
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());

        let loot_box = LootBox::new(name, description, rarity, coins, contents, recipient);
        let created = LootRepository::create(&loot_box)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to create loot box: {}", e)))?;

        let target = created.recipient.as_deref().unwrap_or("all users");
        tracing::info!("Loot box {} ({}) sent to {}", created.id, created.rarity, target);

        crate::publish_event(VaultEvent::LootBoxSent {
            loot_box: created.clone(),
            timestamp: chrono::Utc::now(),
        });

        Ok(created)
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// List the loot boxes a user can still open.
#[get("/api/loot/pending/:email")]
pub async fn pending_loot(email: String) -> Result<Vec<LootBox>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::LootRepository;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        LootRepository::list_pending(&email)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to list loot boxes: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Open a loot box: records the claim and credits the coins. Each user can
/// open a given box at most once.
#[post("/api/loot/open")]
pub async fn open_loot_box(email: String, id: String) -> Result<OpenLootResult, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::{LootRepository, WalletRepository};
        use vault_core::{GrantReason, LootBoxId, VaultEvent};

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let id = LootBoxId::parse(&id)
            .map_err(|_| ServerFnError::new(format!("Invalid loot box id: {}", id)))?;

        let loot_box = LootRepository::get(id)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load loot box: {}", e)))?;

        if !loot_box.addressed_to(&email) {
            return Err(ServerFnError::new("This loot box is not addressed to you"));
        }

        WalletRepository::get_or_create(&email)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load wallet: {}", e)))?;

        // Recording the open first makes the payout exactly-once; a repeat
        // open fails here before any coins move.
        LootRepository::record_open(id, &email)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to open loot box: {}", e)))?;

        let wallet = WalletRepository::credit(&email, loot_box.coins)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to credit coins: {}", e)))?;

        crate::publish_event(VaultEvent::CoinsGranted {
            email,
            amount: loot_box.coins,
            reason: GrantReason::LootBox,
            timestamp: chrono::Utc::now(),
        });

        Ok(OpenLootResult { loot_box, wallet })
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
