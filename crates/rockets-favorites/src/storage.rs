// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Durable storage port and the snapshot service that speaks JSON over it.

use serde::Serialize;
use serde_json::Value;

use crate::error::StoreError;

/// Storage port for raw blobs (keyed by logical name).
///
/// Implementations must not interpret the bytes they hold.
pub trait DurableStore {
    /// Load a raw blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StoreError>;
    /// Persist a raw blob, replacing any previous value.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StoreError>;
}

impl<S: DurableStore + ?Sized> DurableStore for &S {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        (**self).load_raw(key)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StoreError> {
        (**self).save_raw(key, data)
    }
}

/// Thin service that reads and writes one JSON document under a fixed key.
pub struct SnapshotService<S> {
    store: S,
    key: String,
}

impl<S> SnapshotService<S> {
    /// Create a new service using the given store and storage key.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Storage key this service reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the inner store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> SnapshotService<S>
where
    S: DurableStore,
{
    /// Load the stored document. Returns `Ok(None)` if missing or empty.
    ///
    /// The document is parsed as untyped JSON; shape checks belong to the caller.
    pub fn load(&self) -> Result<Option<Value>, StoreError> {
        match self.store.load_raw(&self.key) {
            Ok(bytes) => {
                if bytes.is_empty() {
                    return Ok(None);
                }
                let value = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            Err(StoreError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist a document.
    pub fn save<T>(&self, value: &T) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(&self.key, &data)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapStore(RefCell<HashMap<String, Vec<u8>>>);

    impl DurableStore for MapStore {
        fn load_raw(&self, key: &str) -> Result<Vec<u8>, StoreError> {
            self.0.borrow().get(key).cloned().ok_or(StoreError::NotFound)
        }

        fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StoreError> {
            self.0.borrow_mut().insert(key.to_owned(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn missing_key_loads_as_none() {
        let svc = SnapshotService::new(MapStore::default(), "favs");
        assert!(svc.load().unwrap().is_none());
    }

    #[test]
    fn empty_blob_loads_as_none() {
        let store = MapStore::default();
        store.save_raw("favs", b"").unwrap();
        let svc = SnapshotService::new(store, "favs");
        assert!(svc.load().unwrap().is_none());
    }

    #[test]
    fn garbage_blob_is_serde_error() {
        let store = MapStore::default();
        store.save_raw("favs", b"{not json").unwrap();
        let svc = SnapshotService::new(store, "favs");
        assert!(matches!(svc.load(), Err(StoreError::Serde(_))));
    }

    #[test]
    fn save_writes_under_configured_key() {
        let svc = SnapshotService::new(MapStore::default(), "favs");
        svc.save(&serde_json::json!({"pads": ["1"]})).unwrap();
        let loaded = svc.load().unwrap().unwrap();
        assert_eq!(loaded["pads"][0], "1");
        assert!(svc.store().load_raw("other").is_err());
    }
}
