//! Server initialization for the VaultFUT application.

use db::{DbConfig, DbError};
use tokio::sync::OnceCell;
use vault_core::DEFAULT_ADMIN_EMAIL;

static INIT: OnceCell<()> = OnceCell::const_new();

/// The configured administrator identity.
pub fn admin_email() -> String {
    std::env::var("VAULTFUT_ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string())
}

/// Ensure the application is initialized before handling a request.
///
/// Safe to call from every server function; initialization runs once.
pub async fn ensure_initialized() -> Result<(), DbError> {
    INIT.get_or_try_init(init_app).await?;
    Ok(())
}

/// Initialize the database and seed required records.
async fn init_app() -> Result<(), DbError> {
    tracing::info!("Initializing VaultFUT backend...");

    let db_config = if std::env::var("RAILWAY_ENVIRONMENT").is_ok() {
        // Railway deployment - use file-based storage
        DbConfig::file("./data/surrealdb")
    } else {
        // Local development - use in-memory
        DbConfig::memory()
    };

    db::init(db_config).await?;

    // The maintenance gate and the theme both read a single authoritative
    // row; seed them so the first fetch never 404s.
    db::repositories::MaintenanceRepository::ensure_exists().await?;
    db::repositories::SettingsRepository::ensure_exists().await?;

    tracing::info!("VaultFUT backend initialized (admin: {})", admin_email());
    Ok(())
}
