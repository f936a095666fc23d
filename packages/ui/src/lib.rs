//! This crate contains all shared UI for the VaultFUT workspace.

// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

mod storage;
pub use storage::{ClientKv, client_store};

mod timers;

mod session;
pub use session::{SessionState, SignInForm, SessionProvider, use_session};

mod navbar;
pub use navbar::Navbar;

pub mod interrupt;
pub use interrupt::{BroadcastBanner, FullScreenBroadcast, MaintenanceOverlay};

mod achievements;
pub use achievements::AchievementsPanel;

mod messages;
pub use messages::MessagesPanel;

mod rewards;
pub use rewards::RewardsPanel;

mod theme;
pub use theme::use_site_theme;

mod shop;
pub use shop::ShopPage;

mod vault;
pub use vault::VaultPage;

mod wheel;
pub use wheel::WheelPage;

pub mod admin;
