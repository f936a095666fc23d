//! Shop order domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a shop order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub Ulid);

impl OrderId {
    /// Create a new unique order ID.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Parse an order ID from a string.
    pub fn parse(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a shop order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Waiting for admin review.
    #[default]
    Pending,
    /// Approved for delivery.
    Approved,
    /// Declined by the admin.
    Declined,
}

impl OrderStatus {
    /// Check if the order has reached a terminal state.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, OrderStatus::Pending)
    }

    /// Get a simple status string for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Approved => "approved",
            OrderStatus::Declined => "declined",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A coin purchase order exchanging site coins for in-game currency.
///
/// Orders are submitted by users and resolved (approved or declined) by the
/// admin. Delivery itself happens out of band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier for this order.
    pub id: OrderId,
    /// Buyer's email.
    pub email: String,
    /// Size of the coin package, in in-game coins.
    pub package_coins: i64,
    /// Buyer's in-game player name used for delivery.
    pub player_name: String,
    /// Rating of the listed transfer card.
    pub rating: u32,
    /// Buy-now price the buyer set on their listing.
    pub buy_now_price: i64,
    /// Free-form delivery instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// When the order was submitted.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a new pending order.
    pub fn new(
        email: impl Into<String>,
        package_coins: i64,
        player_name: impl Into<String>,
        rating: u32,
        buy_now_price: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: OrderId::new(),
            email: email.into(),
            package_coins,
            player_name: player_name.into(),
            rating,
            buy_now_price,
            instructions: None,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach delivery instructions to this order.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }
}
