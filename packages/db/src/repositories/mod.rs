//! Repository implementations for database operations.

mod achievement_repo;
mod broadcast_repo;
mod loot_repo;
mod maintenance_repo;
mod message_repo;
mod order_repo;
mod settings_repo;
mod wallet_repo;

pub use achievement_repo::AchievementRepository;
pub use broadcast_repo::BroadcastRepository;
pub use loot_repo::LootRepository;
pub use maintenance_repo::MaintenanceRepository;
pub use message_repo::MessageRepository;
pub use order_repo::OrderRepository;
pub use settings_repo::SettingsRepository;
pub use wallet_repo::WalletRepository;
