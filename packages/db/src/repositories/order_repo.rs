//! Shop order repository for CRUD operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;
use vault_core::{Order, OrderId, OrderStatus};

use crate::{DbError, get_db};

/// Repository for shop order persistence operations.
pub struct OrderRepository;

/// Internal record type for SurrealDB reads.
#[derive(Debug, Deserialize)]
struct OrderRecord {
    id: Option<Thing>,
    email: String,
    package_coins: i64,
    player_name: String,
    rating: u32,
    buy_now_price: i64,
    instructions: Option<String>,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRecord {
    fn into_order(self) -> Order {
        let id_str = self.id.as_ref().map(|t| t.id.to_raw()).unwrap_or_default();
        let id = OrderId::parse(&id_str).unwrap_or_default();
        Order {
            id,
            email: self.email,
            package_coins: self.package_coins,
            player_name: self.player_name,
            rating: self.rating,
            buy_now_price: self.buy_now_price,
            instructions: self.instructions,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Struct for creating orders - omits datetime fields to use SurrealDB defaults.
#[derive(Debug, Clone, Serialize)]
struct OrderCreate {
    email: String,
    package_coins: i64,
    player_name: String,
    rating: u32,
    buy_now_price: i64,
    instructions: Option<String>,
    status: OrderStatus,
}

impl OrderRepository {
    /// Create a new order in the database.
    pub async fn create(order: &Order) -> Result<Order, DbError> {
        let db = get_db()?;
        let order_id = order.id.to_string();

        let create_data = OrderCreate {
            email: order.email.clone(),
            package_coins: order.package_coins,
            player_name: order.player_name.clone(),
            rating: order.rating,
            buy_now_price: order.buy_now_price,
            instructions: order.instructions.clone(),
            status: order.status,
        };

        let record: Option<OrderRecord> = db
            .create(("shop_order", &order_id))
            .content(create_data)
            .await?;

        record
            .map(OrderRecord::into_order)
            .ok_or_else(|| DbError::Query("Failed to create order".into()))
    }

    /// Get an order by ID.
    pub async fn get(id: OrderId) -> Result<Order, DbError> {
        let db = get_db()?;

        let record: Option<OrderRecord> = db.select(("shop_order", id.to_string())).await?;

        record
            .map(OrderRecord::into_order)
            .ok_or_else(|| DbError::NotFound(format!("Order not found: {}", id)))
    }

    /// List all orders, newest first.
    pub async fn list() -> Result<Vec<Order>, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("SELECT * FROM shop_order ORDER BY created_at DESC")
            .await?;

        let records: Vec<OrderRecord> = result.take(0)?;

        Ok(records.into_iter().map(OrderRecord::into_order).collect())
    }

    /// List orders submitted by one user, newest first.
    pub async fn list_for_email(email: &str) -> Result<Vec<Order>, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("SELECT * FROM shop_order WHERE email = $email ORDER BY created_at DESC")
            .bind(("email", email.to_string()))
            .await?;

        let records: Vec<OrderRecord> = result.take(0)?;

        Ok(records.into_iter().map(OrderRecord::into_order).collect())
    }

    /// Resolve a pending order to approved or declined.
    ///
    /// Resolution is only legal from `Pending`; a second resolution attempt
    /// fails rather than silently flipping the outcome.
    pub async fn resolve(id: OrderId, status: OrderStatus) -> Result<Order, DbError> {
        if !status.is_resolved() {
            return Err(DbError::InvalidState(
                "Orders can only be resolved to approved or declined".into(),
            ));
        }

        let db = get_db()?;

        let mut result = db
            .query(
                "UPDATE type::thing('shop_order', $id) \
                 SET status = $status, updated_at = time::now() \
                 WHERE status = 'pending' RETURN AFTER",
            )
            .bind(("id", id.to_string()))
            .bind(("status", status))
            .await?;

        let records: Vec<OrderRecord> = result.take(0)?;

        if let Some(record) = records.into_iter().next() {
            return Ok(record.into_order());
        }

        // Distinguish "missing" from "already resolved".
        let existing: Option<OrderRecord> = db.select(("shop_order", id.to_string())).await?;
        match existing {
            Some(record) => Err(DbError::InvalidState(format!(
                "Order {} already {}",
                id,
                record.status.as_str()
            ))),
            None => Err(DbError::NotFound(format!("Order not found: {}", id))),
        }
    }
}
