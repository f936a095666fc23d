//! Broadcast management server functions.

use dioxus::prelude::*;
use vault_core::Broadcast;

/// Send a new broadcast to all connected clients.
#[post("/api/broadcasts/send")]
pub async fn send_broadcast(
    title: String,
    message: String,
    priority: String,
) -> Result<Broadcast, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::{BroadcastRepository, MessageRepository};
        use vault_core::{Message, MessageKind, Priority, VaultEvent};

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        if title.trim().is_empty() || message.trim().is_empty() {
            return Err(ServerFnError::new("Title and message are required"));
        }

        let priority = match priority.as_str() {
            "low" => Priority::Low,
            "critical" => Priority::Critical,
            _ => Priority::Normal,
        };

        let broadcast = Broadcast::new(title, message, priority);
        let created = BroadcastRepository::create(&broadcast)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to create broadcast: {}", e)))?;

        tracing::info!("Broadcast {} sent ({} priority)", created.id, created.priority);

        // Mirror the broadcast onto the message board for anyone who missed
        // the live reveal.
        let mirror = Message::new(MessageKind::Broadcast, &created.title, &created.message);
        if let Err(e) = MessageRepository::create(&mirror).await {
            tracing::warn!("Failed to mirror broadcast to messages: {}", e);
        }

        crate::publish_event(VaultEvent::BroadcastSent {
            broadcast: created.clone(),
            timestamp: chrono::Utc::now(),
        });

        Ok(created)
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Get the single most-recently-created active broadcast.
#[get("/api/broadcasts/latest")]
pub async fn latest_broadcast() -> Result<Option<Broadcast>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::BroadcastRepository;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        BroadcastRepository::latest_active()
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to fetch broadcast: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// List recent broadcasts for the admin panel, newest first.
#[get("/api/broadcasts")]
pub async fn list_broadcasts(limit: Option<usize>) -> Result<Vec<Broadcast>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::BroadcastRepository;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        BroadcastRepository::list_recent(limit.unwrap_or(20))
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to list broadcasts: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
