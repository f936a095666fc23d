//! Site settings server functions. For now that is the active theme.

use dioxus::prelude::*;
use vault_core::Theme;

/// Fetch the active site theme.
#[get("/api/theme")]
pub async fn site_theme() -> Result<Theme, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::SettingsRepository;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        SettingsRepository::get_theme()
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to load theme: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Switch the site-wide theme. Admin surface only.
#[post("/api/theme/set")]
pub async fn set_theme(theme: String) -> Result<Theme, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::SettingsRepository;
        use vault_core::VaultEvent;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let Some(theme) = Theme::parse(&theme) else {
            return Err(ServerFnError::new(format!("Unknown theme: {}", theme)));
        };

        let applied = SettingsRepository::set_theme(theme)
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to switch theme: {}", e)))?;

        tracing::info!("Site theme switched to {}", applied.as_str());

        crate::publish_event(VaultEvent::ThemeChanged {
            theme: applied,
            timestamp: chrono::Utc::now(),
        });

        Ok(applied)
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
