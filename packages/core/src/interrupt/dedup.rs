//! Client-local dedup ledger for already-shown broadcasts.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::BroadcastId;

/// Storage key for the last broadcast id revealed full-screen.
pub const LAST_BROADCAST_KEY: &str = "vaultfut.last_broadcast_shown";

/// Storage key for the last broadcast id dismissed from the inline banner.
pub const BANNER_DISMISSED_KEY: &str = "vaultfut.banner_dismissed";

/// Client-side key-value persistence.
///
/// On the web this is backed by `localStorage` so the ledger survives
/// reloads; tests and native builds inject [`MemoryKv`]. The store is
/// injected explicitly rather than accessed as an ambient global so callers
/// can supply fakes.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-process key-value store.
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: KvStore + ?Sized> KvStore for &K {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }
}

/// Decides whether a broadcast id should be revealed to this client.
///
/// The ledger records only the single most recent id actually revealed; a
/// broadcast is shown exactly when its id differs from that record. The
/// full-screen reveal and the inline banner each keep their own ledger
/// under a different storage key.
#[derive(Debug)]
pub struct DedupStore<K: KvStore> {
    store: K,
    key: &'static str,
}

impl<K: KvStore> DedupStore<K> {
    /// Ledger for the full-screen reveal.
    pub fn new(store: K) -> Self {
        Self::with_key(store, LAST_BROADCAST_KEY)
    }

    /// Ledger under a caller-chosen storage key.
    pub fn with_key(store: K, key: &'static str) -> Self {
        Self { store, key }
    }

    /// The last broadcast id recorded as shown, if any.
    pub fn last_shown(&self) -> Option<BroadcastId> {
        self.store
            .get(self.key)
            .and_then(|raw| BroadcastId::parse(&raw).ok())
    }

    /// True if `id` has not yet been revealed on this client.
    pub fn should_show(&self, id: BroadcastId) -> bool {
        self.last_shown() != Some(id)
    }

    /// Record `id` as shown, overwriting any previous record.
    pub fn mark_shown(&self, id: BroadcastId) {
        self.store.set(self.key, &id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_id_should_show() {
        let dedup = DedupStore::new(MemoryKv::new());
        assert!(dedup.should_show(BroadcastId::new()));
    }

    #[test]
    fn marked_id_never_shows_again() {
        let dedup = DedupStore::new(MemoryKv::new());
        let id = BroadcastId::new();

        assert!(dedup.should_show(id));
        dedup.mark_shown(id);
        assert!(!dedup.should_show(id));
        assert!(!dedup.should_show(id));
    }

    #[test]
    fn newer_id_overwrites_older() {
        let dedup = DedupStore::new(MemoryKv::new());
        let first = BroadcastId::new();
        let second = BroadcastId::new();

        dedup.mark_shown(first);
        assert!(dedup.should_show(second));
        dedup.mark_shown(second);
        assert!(!dedup.should_show(second));
        // The ledger holds one id, so the older one is eligible again.
        assert!(dedup.should_show(first));
    }

    #[test]
    fn corrupt_stored_value_is_treated_as_unseen() {
        let store = MemoryKv::new();
        store.set(LAST_BROADCAST_KEY, "not-a-ulid");
        let dedup = DedupStore::new(store);
        assert!(dedup.should_show(BroadcastId::new()));
    }

    #[test]
    fn ledger_survives_reconstruction() {
        // Simulates a reload: the kv store persists, the dedup wrapper does not.
        let store = MemoryKv::new();
        let id = BroadcastId::new();
        DedupStore::new(&store).mark_shown(id);
        assert!(!DedupStore::new(&store).should_show(id));
    }

    #[test]
    fn ledgers_under_different_keys_are_independent() {
        // The overlay marking an id shown must not hide it from the banner,
        // and a banner dismissal must not suppress the full-screen reveal.
        let store = MemoryKv::new();
        let id = BroadcastId::new();

        let reveal = DedupStore::new(&store);
        let banner = DedupStore::with_key(&store, BANNER_DISMISSED_KEY);

        reveal.mark_shown(id);
        assert!(!reveal.should_show(id));
        assert!(banner.should_show(id));

        banner.mark_shown(id);
        assert!(!banner.should_show(id));
    }
}
