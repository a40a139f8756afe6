// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared in-memory backend for favorites store tests.

use rockets_favorites::{DurableStore, StoreError};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// [`DurableStore`] kept in memory, with failure switches and I/O counters.
///
/// Clones share one backend: hand a clone to the store under test and keep
/// the original to inspect what was written or to reopen a later session.
///
/// # Example
///
/// ```
/// use rockets_dry_tests::InMemoryDurableStore;
/// use rockets_favorites::{Category, FavoritesConfig, FavoritesStore, DEFAULT_STORAGE_KEY};
///
/// let backend = InMemoryDurableStore::new();
/// let mut store = FavoritesStore::open(backend.clone(), &FavoritesConfig::default());
///
/// store.add(Category::Launches, "5eb87cd9ffd86e000604b32a");
/// assert_eq!(backend.save_count(), 1);
/// assert!(backend.json(DEFAULT_STORAGE_KEY).is_some());
/// ```
#[derive(Clone, Default)]
pub struct InMemoryDurableStore {
    shared: Arc<Mutex<Backend>>,
}

#[derive(Default)]
struct Backend {
    blobs: HashMap<String, Vec<u8>>,
    loads: usize,
    saves: usize,
    fail_load: bool,
    fail_save: bool,
}

impl InMemoryDurableStore {
    /// Backend with nothing persisted yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend where a previous session left `snapshot` under `key`.
    pub fn with_json(key: &str, snapshot: &Value) -> Self {
        let store = Self::new();
        store
            .lock()
            .blobs
            .insert(key.to_owned(), snapshot.to_string().into_bytes());
        store
    }

    /// Bytes last written under `key`. Not counted as a load.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().blobs.get(key).cloned()
    }

    /// Snapshot under `key`, if it parses as JSON.
    pub fn json(&self, key: &str) -> Option<Value> {
        self.raw(key)
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
    }

    /// Make every following read fail (or succeed again).
    pub fn set_fail_on_load(&self, fail: bool) {
        self.lock().fail_load = fail;
    }

    /// Make every following write fail (or succeed again).
    pub fn set_fail_on_save(&self, fail: bool) {
        self.lock().fail_save = fail;
    }

    /// Reads attempted so far, failed ones included.
    pub fn load_count(&self) -> usize {
        self.lock().loads
    }

    /// Writes attempted so far, failed ones included.
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    // A panicking test must not poison the fake for the rest of the suite.
    fn lock(&self) -> MutexGuard<'_, Backend> {
        self.shared.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DurableStore for InMemoryDurableStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let mut backend = self.lock();
        backend.loads += 1;
        if backend.fail_load {
            return Err(StoreError::Other("storage unavailable".into()));
        }
        backend.blobs.get(key).cloned().ok_or(StoreError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StoreError> {
        let mut backend = self.lock();
        backend.saves += 1;
        if backend.fail_save {
            return Err(StoreError::Other("quota exceeded".into()));
        }
        backend.blobs.insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn seeded_snapshot_is_visible_without_a_load() {
        let store = InMemoryDurableStore::with_json("favs", &json!({"pads": []}));
        assert_eq!(store.json("favs"), Some(json!({"pads": []})));
        assert_eq!(store.load_count(), 0);
        assert!(matches!(store.load_raw("other"), Err(StoreError::NotFound)));
        assert_eq!(store.load_count(), 1);
    }

    #[test]
    fn failed_write_is_counted_and_keeps_previous_bytes() {
        let store = InMemoryDurableStore::with_json("favs", &json!({"rockets": []}));
        let before = store.raw("favs");
        store.set_fail_on_save(true);
        assert!(store.save_raw("favs", b"{}").is_err());
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.raw("favs"), before);
    }

    #[test]
    fn clones_observe_each_others_writes_and_switches() {
        let session = InMemoryDurableStore::new();
        let inspector = session.clone();
        session.save_raw("favs", b"[]").unwrap();
        assert_eq!(inspector.raw("favs").as_deref(), Some(&b"[]"[..]));

        inspector.set_fail_on_load(true);
        assert!(session.load_raw("favs").is_err());
        inspector.set_fail_on_load(false);
        assert_eq!(session.load_raw("favs").unwrap(), b"[]");
        assert_eq!(inspector.load_count(), 2);
    }
}
