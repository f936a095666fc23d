//! Admin panel components for the VaultFUT control surface.

mod broadcast_form;
mod dashboard;
mod grant_form;
mod loot_form;
mod maintenance_toggle;
mod message_form;
mod order_list;
mod theme_switcher;

pub use broadcast_form::BroadcastForm;
pub use dashboard::AdminDashboardPage;
pub use grant_form::GrantForm;
pub use loot_form::LootForm;
pub use maintenance_toggle::MaintenanceToggle;
pub use message_form::MessageForm;
pub use order_list::OrderList;
pub use theme_switcher::ThemeSwitcher;
