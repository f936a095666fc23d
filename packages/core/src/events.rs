//! Event types for real-time updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Broadcast, LootBox, MaintenanceStatus, Message, Order, OrderId, OrderStatus, Theme};

/// Why coins were granted to a wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantReason {
    DailyReward,
    AdWatch,
    WheelSpin,
    AdminGrant,
    AchievementReward,
    LootBox,
}

impl GrantReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantReason::DailyReward => "daily_reward",
            GrantReason::AdWatch => "ad_watch",
            GrantReason::WheelSpin => "wheel_spin",
            GrantReason::AdminGrant => "admin_grant",
            GrantReason::AchievementReward => "achievement_reward",
            GrantReason::LootBox => "loot_box",
        }
    }
}

/// Events emitted by the application for real-time updates.
///
/// Every mutating action publishes exactly one event; subscribers re-fetch
/// authoritative state rather than applying events incrementally, so
/// out-of-order delivery self-corrects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum VaultEvent {
    /// An admin sent a new broadcast.
    BroadcastSent {
        broadcast: Broadcast,
        timestamp: DateTime<Utc>,
    },
    /// The maintenance record was toggled.
    MaintenanceChanged {
        status: MaintenanceStatus,
        timestamp: DateTime<Utc>,
    },
    /// A user submitted a shop order.
    OrderSubmitted {
        order: Order,
        timestamp: DateTime<Utc>,
    },
    /// An admin approved or declined an order.
    OrderResolved {
        order_id: OrderId,
        status: OrderStatus,
        timestamp: DateTime<Utc>,
    },
    /// Coins were credited to a wallet.
    CoinsGranted {
        email: String,
        amount: i64,
        reason: GrantReason,
        timestamp: DateTime<Utc>,
    },
    /// A dashboard message was posted.
    MessagePosted {
        message: Message,
        timestamp: DateTime<Utc>,
    },
    /// The admin dropped a loot box.
    LootBoxSent {
        loot_box: LootBox,
        timestamp: DateTime<Utc>,
    },
    /// The admin switched the site theme.
    ThemeChanged {
        theme: Theme,
        timestamp: DateTime<Utc>,
    },
}

impl VaultEvent {
    /// Get the timestamp of the event.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            VaultEvent::BroadcastSent { timestamp, .. } => *timestamp,
            VaultEvent::MaintenanceChanged { timestamp, .. } => *timestamp,
            VaultEvent::OrderSubmitted { timestamp, .. } => *timestamp,
            VaultEvent::OrderResolved { timestamp, .. } => *timestamp,
            VaultEvent::CoinsGranted { timestamp, .. } => *timestamp,
            VaultEvent::MessagePosted { timestamp, .. } => *timestamp,
            VaultEvent::LootBoxSent { timestamp, .. } => *timestamp,
            VaultEvent::ThemeChanged { timestamp, .. } => *timestamp,
        }
    }

    /// Get a short description of this event for logging.
    pub fn description(&self) -> String {
        match self {
            VaultEvent::BroadcastSent { broadcast, .. } => {
                format!(
                    "Broadcast {} sent ({} priority)",
                    broadcast.id, broadcast.priority
                )
            }
            VaultEvent::MaintenanceChanged { status, .. } => {
                let state = if status.is_active { "on" } else { "off" };
                format!("Maintenance mode {}", state)
            }
            VaultEvent::OrderSubmitted { order, .. } => {
                format!(
                    "Order {} submitted by {} ({} coins)",
                    order.id, order.email, order.package_coins
                )
            }
            VaultEvent::OrderResolved {
                order_id, status, ..
            } => format!("Order {} {}", order_id, status),
            VaultEvent::CoinsGranted {
                email,
                amount,
                reason,
                ..
            } => format!("{} coins granted to {} ({})", amount, email, reason.as_str()),
            VaultEvent::MessagePosted { message, .. } => {
                format!("Message {} posted ({})", message.id, message.kind)
            }
            VaultEvent::LootBoxSent { loot_box, .. } => {
                let target = loot_box.recipient.as_deref().unwrap_or("all users");
                format!("Loot box {} sent to {}", loot_box.id, target)
            }
            VaultEvent::ThemeChanged { theme, .. } => {
                format!("Theme switched to {}", theme.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MessageKind, Priority, Rarity};

    #[test]
    fn events_tag_by_variant_name() {
        let event = VaultEvent::CoinsGranted {
            email: "player@example.com".to_string(),
            amount: 500,
            reason: GrantReason::DailyReward,
            timestamp: Utc::now(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "coins_granted");
        assert_eq!(json["reason"], "daily_reward");
    }

    #[test]
    fn description_and_timestamp_cover_every_variant() {
        let now = Utc::now();
        let broadcast = Broadcast::new("t", "m", Priority::Critical);
        let order = Order::new("player@example.com", 10_000, "FUT_Master", 85, 5_001);

        let events = [
            VaultEvent::BroadcastSent {
                broadcast,
                timestamp: now,
            },
            VaultEvent::MaintenanceChanged {
                status: MaintenanceStatus::default(),
                timestamp: now,
            },
            VaultEvent::OrderSubmitted {
                order: order.clone(),
                timestamp: now,
            },
            VaultEvent::OrderResolved {
                order_id: order.id,
                status: OrderStatus::Approved,
                timestamp: now,
            },
            VaultEvent::CoinsGranted {
                email: "player@example.com".to_string(),
                amount: 100,
                reason: GrantReason::AdWatch,
                timestamp: now,
            },
            VaultEvent::MessagePosted {
                message: Message::new(MessageKind::Event, "Double Coins", "This weekend only"),
                timestamp: now,
            },
            VaultEvent::LootBoxSent {
                loot_box: LootBox::new("Crate", "Bonus", Rarity::Rare, 250, vec![], None),
                timestamp: now,
            },
            VaultEvent::ThemeChanged {
                theme: Theme::Christmas,
                timestamp: now,
            },
        ];

        for event in events {
            assert_eq!(event.timestamp(), now);
            assert!(!event.description().is_empty());
        }
    }
}
