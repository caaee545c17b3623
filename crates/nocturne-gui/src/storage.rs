//! Bridge between the preference store and eframe's persistence layer
//!
//! eframe hands a read-only storage snapshot to the app at creation and
//! asks for writes through `App::save`, so the controller runs against a
//! [`MemoryStore`] seeded here and flushed back in `save`.

use eframe::Storage;
use nocturne_core::{MemoryStore, PreferenceStore, THEME_KEY};
use tracing::warn;

/// Seed an in-memory preference store from host storage.
///
/// When the host provides no storage backend, the preference degrades to
/// session-only in-memory state instead of failing.
pub fn load_store(storage: Option<&dyn Storage>) -> MemoryStore {
    let mut store = MemoryStore::new();

    match storage {
        Some(storage) => {
            if let Some(value) = storage.get_string(THEME_KEY) {
                store.insert(THEME_KEY, value);
            }
        }
        None => {
            warn!("persistent storage unavailable, theme preference lasts this session only");
        }
    }

    store
}

/// Write the preference back into host storage
pub fn persist(store: &MemoryStore, storage: &mut dyn Storage) {
    if let Ok(Some(value)) = store.get(THEME_KEY) {
        storage.set_string(THEME_KEY, value);
        storage.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Host storage double
    #[derive(Default)]
    struct FakeStorage {
        entries: HashMap<String, String>,
        flushes: usize,
    }

    impl Storage for FakeStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.entries.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.entries.insert(key.to_string(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn test_load_seeds_from_host_storage() {
        let mut host = FakeStorage::default();
        host.set_string(THEME_KEY, "dark".to_string());

        let store = load_store(Some(&host));

        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_load_without_host_storage_is_empty() {
        let store = load_store(None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_persist_writes_and_flushes() {
        let mut store = MemoryStore::new();
        store.insert(THEME_KEY, "light");
        let mut host = FakeStorage::default();

        persist(&store, &mut host);

        assert_eq!(host.get_string(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(host.flushes, 1);
    }

    #[test]
    fn test_persist_skips_unset_preference() {
        let store = MemoryStore::new();
        let mut host = FakeStorage::default();

        persist(&store, &mut host);

        assert_eq!(host.get_string(THEME_KEY), None);
        assert_eq!(host.flushes, 0);
    }
}
