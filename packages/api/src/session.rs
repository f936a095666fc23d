//! Viewer identity server functions.
//!
//! Identity is a trusted email string: the original delegated real
//! authentication to its backend service, and this port keeps that boundary.
//! Resolution derives the admin flag server-side so the client never embeds
//! the administrator identity.

use dioxus::prelude::*;
use vault_core::Viewer;

/// Sign a viewer in: resolve identity and create their wallet on first visit.
#[post("/api/session/sign-in")]
pub async fn sign_in(email: String) -> Result<Viewer, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::WalletRepository;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let email = email.trim().to_string();
        if !email.contains('@') {
            return Err(ServerFnError::new("A valid email is required"));
        }

        WalletRepository::get_or_create(&email)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to create wallet: {}", e)))?;

        let viewer = Viewer::resolve(email, &crate::admin_email());
        tracing::info!("Viewer signed in: {} (admin: {})", viewer.email, viewer.is_admin);

        Ok(viewer)
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Re-resolve a stored identity, e.g. after a reload.
#[get("/api/session/viewer/:email")]
pub async fn current_viewer(email: String) -> Result<Viewer, ServerFnError> {
    #[cfg(feature = "server")]
    {
        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        Ok(Viewer::resolve(email.trim(), &crate::admin_email()))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
