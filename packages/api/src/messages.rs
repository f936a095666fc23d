//! Dashboard message server functions.

use dioxus::prelude::*;
use vault_core::Message;

/// List recent dashboard messages, newest first.
#[get("/api/messages")]
pub async fn list_messages(limit: Option<usize>) -> Result<Vec<Message>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::MessageRepository;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        MessageRepository::list_recent(limit.unwrap_or(20))
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to list messages: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Post a dashboard message to all users.
#[post("/api/messages/post")]
pub async fn post_message(
    kind: String,
    title: String,
    body: String,
) -> Result<Message, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::MessageRepository;
        use vault_core::{MessageKind, VaultEvent};

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        if title.trim().is_empty() || body.trim().is_empty() {
            return Err(ServerFnError::new("Title and body are required"));
        }

        let kind = MessageKind::parse(&kind).unwrap_or_default();
        let message = Message::new(kind, title, body);
        let created = MessageRepository::create(&message)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to create message: {}", e)))?;

        crate::publish_event(VaultEvent::MessagePosted {
            message: created.clone(),
            timestamp: chrono::Utc::now(),
        });

        Ok(created)
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
