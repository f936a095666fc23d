//! Maintenance mode server functions.

use dioxus::prelude::*;
use vault_core::MaintenanceStatus;

/// Get the current maintenance status.
#[get("/api/maintenance")]
pub async fn maintenance_status() -> Result<MaintenanceStatus, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::MaintenanceRepository;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        MaintenanceRepository::get()
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to fetch maintenance status: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Toggle maintenance mode. The kill-switch every connected client reacts to.
#[post("/api/maintenance")]
pub async fn set_maintenance(
    active: bool,
    message: String,
    expected_downtime: String,
) -> Result<MaintenanceStatus, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::MaintenanceRepository;
        use vault_core::VaultEvent;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let status = MaintenanceRepository::set(active, message, expected_downtime)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to toggle maintenance: {}", e)))?;

        tracing::info!(
            "Maintenance mode {}",
            if status.is_active { "enabled" } else { "disabled" }
        );

        crate::publish_event(VaultEvent::MaintenanceChanged {
            status: status.clone(),
            timestamp: chrono::Utc::now(),
        });

        Ok(status)
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
