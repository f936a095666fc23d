//! Core domain types for the VaultFUT rewards application.
//!
//! This crate contains shared types used across all packages:
//! - Broadcast and Priority for admin announcements
//! - MaintenanceStatus for the maintenance kill-switch
//! - Order and Wallet for the coin shop and reward grants
//! - Achievement, Message, LootBox and Theme for the dashboard surfaces
//! - Viewer for identity resolution
//! - Events for real-time updates
//! - The interrupt module: dedup store, reveal sequencer, maintenance gate

mod achievement;
mod broadcast;
mod events;
mod loot;
mod maintenance;
mod message;
mod order;
mod rarity;
mod theme;
mod viewer;
mod wallet;

pub mod interrupt;

pub use achievement::{Achievement, AchievementKind};
pub use broadcast::{Broadcast, BroadcastId, Priority, PriorityStyle};
pub use events::{GrantReason, VaultEvent};
pub use loot::{LootBox, LootBoxId};
pub use maintenance::MaintenanceStatus;
pub use message::{Message, MessageId, MessageKind};
pub use order::{Order, OrderId, OrderStatus};
pub use rarity::Rarity;
pub use theme::Theme;
pub use viewer::{DEFAULT_ADMIN_EMAIL, Viewer};
pub use wallet::{AD_REWARD_COINS, DAILY_REWARD_COINS, Wallet};
