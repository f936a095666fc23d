//! Client-side key-value persistence.
//!
//! On the web this wraps `localStorage`, so the broadcast dedup ledger and
//! the remembered sign-in survive reloads. Native and server builds fall
//! back to an in-process store; they render but remember nothing.

#[cfg(not(target_arch = "wasm32"))]
use vault_core::interrupt::MemoryKv;

#[cfg(target_arch = "wasm32")]
use vault_core::interrupt::KvStore;

/// `localStorage`-backed [`KvStore`].
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct BrowserKv;

#[cfg(target_arch = "wasm32")]
impl KvStore for BrowserKv {
    fn get(&self, key: &str) -> Option<String> {
        use gloo_storage::Storage;
        gloo_storage::LocalStorage::get::<String>(key).ok()
    }

    fn set(&self, key: &str, value: &str) {
        use gloo_storage::Storage;
        // Storage can fail (quota, private browsing); the dedup ledger and
        // session just degrade to per-load behavior.
        if let Err(e) = gloo_storage::LocalStorage::set(key, value) {
            tracing::warn!("Failed to persist {}: {}", key, e);
        }
    }
}

/// The key-value store used by components on the current platform.
#[cfg(target_arch = "wasm32")]
pub type ClientKv = BrowserKv;

/// The key-value store used by components on the current platform.
#[cfg(not(target_arch = "wasm32"))]
pub type ClientKv = MemoryKv;

/// Build the platform store.
pub fn client_store() -> ClientKv {
    ClientKv::default()
}
