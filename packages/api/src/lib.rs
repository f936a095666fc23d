//! Server API functions for the VaultFUT application.
//!
//! This crate contains all shared fullstack server functions for:
//! - Broadcast announcements (send, fetch latest active)
//! - Maintenance mode (status, toggle)
//! - Shop orders (submit, list, approve/decline)
//! - Wallets (daily reward, ad grants, admin grants, prize wheel)
//! - Achievements (evaluate, claim rewards)
//! - Dashboard messages and loot boxes
//! - Site settings (theme switching)
//! - Viewer identity resolution
//! - The real-time change feed (long-poll over a broadcast channel)

mod achievements;
mod broadcasts;
mod feed;
mod loot;
mod maintenance;
mod messages;
mod orders;
mod session;
mod settings;
mod wallet;

#[cfg(feature = "server")]
mod init;

#[cfg(feature = "server")]
mod realtime;

// Re-export all server functions
pub use achievements::*;
pub use broadcasts::*;
pub use feed::*;
pub use loot::*;
pub use maintenance::*;
pub use messages::*;
pub use orders::*;
pub use session::*;
pub use settings::*;
pub use wallet::*;

#[cfg(feature = "server")]
pub use init::*;

#[cfg(feature = "server")]
pub use realtime::*;

// Re-export core types for convenience
pub use vault_core::{
    Achievement, AchievementKind, Broadcast, BroadcastId, LootBox, LootBoxId, MaintenanceStatus,
    Message, MessageId, MessageKind, Order, OrderId, OrderStatus, Priority, Rarity, Theme,
    VaultEvent, Viewer, Wallet,
};
