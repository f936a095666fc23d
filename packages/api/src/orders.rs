//! Shop order server functions.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use vault_core::Order;
#[cfg(feature = "server")]
use vault_core::OrderId;

/// Request type for submitting an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOrderRequest {
    pub email: String,
    pub package_coins: i64,
    pub player_name: String,
    pub rating: u32,
    pub buy_now_price: i64,
    #[serde(default)]
    pub instructions: Option<String>,
}

/// Submit a new order for admin approval.
#[post("/api/orders/submit")]
pub async fn submit_order(request: SubmitOrderRequest) -> Result<Order, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::OrderRepository;
        use vault_core::VaultEvent;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        if request.player_name.trim().is_empty() {
            return Err(ServerFnError::new("Player name is required"));
        }
        if request.package_coins <= 0 {
            return Err(ServerFnError::new("Package size must be positive"));
        }

        let mut order = Order::new(
            request.email,
            request.package_coins,
            request.player_name,
            request.rating,
            request.buy_now_price,
        );
        if let Some(instructions) = request.instructions {
            order = order.with_instructions(instructions);
        }

        let created = OrderRepository::create(&order)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to submit order: {}", e)))?;

        crate::publish_event(VaultEvent::OrderSubmitted {
            order: created.clone(),
            timestamp: chrono::Utc::now(),
        });

        Ok(created)
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// List all orders for the admin panel, newest first.
#[get("/api/orders")]
pub async fn list_orders() -> Result<Vec<Order>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::OrderRepository;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        OrderRepository::list()
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to list orders: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// List the orders submitted by one user, newest first.
#[get("/api/orders/by/:email")]
pub async fn list_my_orders(email: String) -> Result<Vec<Order>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::OrderRepository;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        OrderRepository::list_for_email(&email)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to list orders: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Approve or decline a pending order.
#[post("/api/orders/:id/resolve")]
pub async fn resolve_order(id: String, approve: bool) -> Result<Order, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::OrderRepository;
        use vault_core::{OrderStatus, VaultEvent};

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let order_id = OrderId::parse(&id)
            .map_err(|e| ServerFnError::new(format!("Invalid order ID: {}", e)))?;

        let status = if approve {
            OrderStatus::Approved
        } else {
            OrderStatus::Declined
        };

        let resolved = OrderRepository::resolve(order_id, status)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to resolve order: {}", e)))?;

        tracing::info!("Order {} {}", resolved.id, resolved.status);

        crate::publish_event(VaultEvent::OrderResolved {
            order_id: resolved.id,
            status: resolved.status,
            timestamp: chrono::Utc::now(),
        });

        Ok(resolved)
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
