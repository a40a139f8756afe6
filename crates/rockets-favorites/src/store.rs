// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Favorites Store: owns the authoritative state and keeps the durable snapshot in step.

use std::time::Instant;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::category::Category;
use crate::config::FavoritesConfig;
use crate::diagnostics::{DiagnosticKind, DiagnosticsLog};
use crate::error::{FavoritesError, StoreError};
use crate::state::FavoritesState;
use crate::storage::{DurableStore, SnapshotService};

/// Whether mutations are still being written to durable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Every mutation is written through.
    Durable,
    /// A write failed earlier this session; state lives in memory only.
    Degraded,
}

/// Outcome of a committed mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    /// The in-memory state differs from before the call.
    pub changed: bool,
    /// The full state was written to durable storage.
    pub persisted: bool,
}

/// Owner of the Favorites State.
///
/// Mutations update memory first and then write the whole snapshot
/// synchronously. A failed write is not rolled back or retried; it flips
/// the store to [`Persistence::Degraded`] for the rest of its life.
pub struct FavoritesStore<S> {
    snapshots: SnapshotService<S>,
    state: FavoritesState,
    extras: Map<String, Value>,
    persistence: Persistence,
    diagnostics: DiagnosticsLog,
}

impl<S> FavoritesStore<S>
where
    S: DurableStore,
{
    /// Hydrate from the persisted snapshot, or start empty.
    ///
    /// Nothing is written here, even when the snapshot is discarded.
    pub fn open(store: S, config: &FavoritesConfig) -> Self {
        let snapshots = SnapshotService::new(store, config.storage_key.clone());
        let mut diagnostics = DiagnosticsLog::new(config.diagnostics_capacity);

        let (state, extras) = match snapshots.load() {
            Ok(None) => {
                debug!(key = snapshots.key(), "no persisted favorites; starting empty");
                (FavoritesState::default(), Map::new())
            }
            Ok(Some(value)) => match FavoritesState::from_snapshot(&value) {
                Ok(hydrated) => {
                    debug!(
                        key = snapshots.key(),
                        items = hydrated.state.len(),
                        "hydrated favorites"
                    );
                    (hydrated.state, hydrated.extras)
                }
                Err(err) => {
                    warn!(key = snapshots.key(), %err, "failed to initialize favorites from storage");
                    diagnostics.push(
                        DiagnosticKind::MalformedSnapshot,
                        err.to_string(),
                        Instant::now(),
                    );
                    (FavoritesState::default(), Map::new())
                }
            },
            Err(StoreError::Serde(err)) => {
                warn!(key = snapshots.key(), %err, "failed to initialize favorites from storage");
                diagnostics.push(
                    DiagnosticKind::MalformedSnapshot,
                    err.to_string(),
                    Instant::now(),
                );
                (FavoritesState::default(), Map::new())
            }
            Err(err) => {
                warn!(key = snapshots.key(), %err, "failed to read favorites from storage");
                diagnostics.push(
                    DiagnosticKind::PersistenceReadFailure,
                    err.to_string(),
                    Instant::now(),
                );
                (FavoritesState::default(), Map::new())
            }
        };

        Self {
            snapshots,
            state,
            extras,
            persistence: Persistence::Durable,
            diagnostics,
        }
    }

    /// Favorite `id` under `category`. Adding an id twice is a no-op.
    pub fn add(&mut self, category: Category, id: &str) -> Mutation {
        let changed = self.state.insert(category, id);
        self.commit(changed)
    }

    /// Drop every occurrence of `id` under `category`.
    pub fn remove(&mut self, category: Category, id: &str) -> Mutation {
        let changed = self.state.remove(category, id);
        self.commit(changed)
    }

    /// Remove `id` if favorited, otherwise add it.
    pub fn toggle(&mut self, category: Category, id: &str) -> Mutation {
        if self.state.contains(category, id) {
            self.remove(category, id)
        } else {
            self.add(category, id)
        }
    }

    /// Empty one category.
    pub fn clear(&mut self, category: Category) -> Mutation {
        let changed = self.state.clear(category);
        self.commit(changed)
    }

    /// Empty every category with a single write.
    pub fn clear_all(&mut self) -> Mutation {
        let mut changed = false;
        for category in Category::ALL {
            changed |= self.state.clear(category);
        }
        self.commit(changed)
    }

    /// [`add`](Self::add) for a category given by wire name.
    pub fn add_by_name(&mut self, category: &str, id: &str) -> Result<Mutation, FavoritesError> {
        let category = self.resolve(category, "add")?;
        Ok(self.add(category, id))
    }

    /// [`remove`](Self::remove) for a category given by wire name.
    pub fn remove_by_name(
        &mut self,
        category: &str,
        id: &str,
    ) -> Result<Mutation, FavoritesError> {
        let category = self.resolve(category, "remove")?;
        Ok(self.remove(category, id))
    }

    fn resolve(&mut self, name: &str, action: &str) -> Result<Category, FavoritesError> {
        name.parse::<Category>().inspect_err(|err| {
            warn!(category = name, "failed to {action} unknown type of favorite item");
            self.diagnostics
                .push(DiagnosticKind::InvalidCategory, err.to_string(), Instant::now());
        })
    }

    fn commit(&mut self, changed: bool) -> Mutation {
        if self.persistence == Persistence::Degraded {
            debug!("favorites store degraded; skipping write");
            return Mutation {
                changed,
                persisted: false,
            };
        }

        let snapshot = self.state.to_snapshot(&self.extras);
        match self.snapshots.save(&snapshot) {
            Ok(()) => {
                debug!(key = self.snapshots.key(), changed, "persisted favorites");
                Mutation {
                    changed,
                    persisted: true,
                }
            }
            Err(err) => {
                warn!(
                    key = self.snapshots.key(),
                    %err,
                    "failed to persist favorites; keeping them in memory for this session"
                );
                self.diagnostics.push(
                    DiagnosticKind::PersistenceWriteFailure,
                    err.to_string(),
                    Instant::now(),
                );
                self.persistence = Persistence::Degraded;
                Mutation {
                    changed,
                    persisted: false,
                }
            }
        }
    }
}

impl<S> FavoritesStore<S> {
    /// Read-only view of the current state.
    pub fn state(&self) -> &FavoritesState {
        &self.state
    }

    /// Whether `id` is favorited under `category`.
    pub fn is_favorite(&self, category: Category, id: &str) -> bool {
        self.state.contains(category, id)
    }

    /// Snapshot keys outside the fixed category set, carried through writes.
    pub fn extras(&self) -> &Map<String, Value> {
        &self.extras
    }

    /// Current persistence mode.
    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    /// Recorded diagnostics.
    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct CellStore {
        blob: RefCell<Option<Vec<u8>>>,
        saves: Cell<usize>,
        fail_save: Cell<bool>,
    }

    impl CellStore {
        fn seeded(value: &Value) -> Self {
            let store = Self::default();
            *store.blob.borrow_mut() = Some(serde_json::to_vec(value).unwrap());
            store
        }

        fn json(&self) -> Option<Value> {
            self.blob
                .borrow()
                .as_ref()
                .map(|b| serde_json::from_slice(b).unwrap())
        }
    }

    impl DurableStore for CellStore {
        fn load_raw(&self, _key: &str) -> Result<Vec<u8>, StoreError> {
            self.blob.borrow().clone().ok_or(StoreError::NotFound)
        }

        fn save_raw(&self, _key: &str, data: &[u8]) -> Result<(), StoreError> {
            self.saves.set(self.saves.get() + 1);
            if self.fail_save.get() {
                return Err(StoreError::Other("quota exceeded".into()));
            }
            *self.blob.borrow_mut() = Some(data.to_vec());
            Ok(())
        }
    }

    fn open(store: &CellStore) -> FavoritesStore<&CellStore> {
        FavoritesStore::open(store, &FavoritesConfig::default())
    }

    #[test]
    fn starts_empty_without_snapshot() {
        let backend = CellStore::default();
        let store = open(&backend);
        assert!(store.state().is_empty());
        assert!(store.diagnostics().is_empty());
    }

    #[test]
    fn malformed_snapshot_is_not_rewritten_on_open() {
        let backend = CellStore::seeded(&json!({"notValid": true}));
        let store = open(&backend);
        assert!(store.state().is_empty());
        assert!(store.diagnostics().has(DiagnosticKind::MalformedSnapshot));
        assert_eq!(backend.saves.get(), 0);
        assert_eq!(backend.json(), Some(json!({"notValid": true})));
    }

    #[test]
    fn unparseable_blob_falls_back_to_default() {
        let backend = CellStore::default();
        *backend.blob.borrow_mut() = Some(b"{{{".to_vec());
        let store = open(&backend);
        assert!(store.state().is_empty());
        assert!(store.diagnostics().has(DiagnosticKind::MalformedSnapshot));
        assert_eq!(backend.saves.get(), 0);
    }

    #[test]
    fn add_persists_even_when_already_present() {
        let backend = CellStore::default();
        let mut store = open(&backend);
        assert!(store.add(Category::Launches, "1").changed);
        let again = store.add(Category::Launches, "1");
        assert!(!again.changed);
        assert!(again.persisted);
        assert_eq!(backend.saves.get(), 2);
        assert_eq!(store.state()[Category::Launches], ["1"]);
    }

    #[test]
    fn invalid_category_touches_nothing() {
        let backend = CellStore::default();
        let mut store = open(&backend);
        assert!(store.add_by_name("invalid_type", "123").is_err());
        assert!(store.remove_by_name("invalid_type", "123").is_err());
        assert!(store.state().is_empty());
        assert_eq!(backend.saves.get(), 0);
        assert!(backend.json().is_none());
        assert!(store.diagnostics().has(DiagnosticKind::InvalidCategory));
    }

    #[test]
    fn write_failure_keeps_memory_and_degrades() {
        let backend = CellStore::default();
        backend.fail_save.set(true);
        let mut store = open(&backend);
        let m = store.add(Category::Pads, "p1");
        assert!(m.changed);
        assert!(!m.persisted);
        assert_eq!(store.persistence(), Persistence::Degraded);
        assert_eq!(store.state()[Category::Pads], ["p1"]);

        backend.fail_save.set(false);
        store.add(Category::Pads, "p2");
        assert_eq!(backend.saves.get(), 1, "degraded store must not retry");
        assert_eq!(store.state()[Category::Pads], ["p1", "p2"]);
    }

    #[test]
    fn toggle_flips_membership() {
        let backend = CellStore::default();
        let mut store = open(&backend);
        store.toggle(Category::Rockets, "falcon9");
        assert!(store.is_favorite(Category::Rockets, "falcon9"));
        store.toggle(Category::Rockets, "falcon9");
        assert!(!store.is_favorite(Category::Rockets, "falcon9"));
    }

    #[test]
    fn clear_all_writes_once() {
        let backend = CellStore::seeded(&json!({
            "launches": ["a"], "pads": ["b"], "rockets": ["c"]
        }));
        let mut store = open(&backend);
        let m = store.clear_all();
        assert!(m.changed);
        assert_eq!(backend.saves.get(), 1);
        assert_eq!(
            backend.json(),
            Some(json!({"launches": [], "pads": [], "rockets": []}))
        );
    }

    #[test]
    fn extras_survive_writes() {
        let backend = CellStore::seeded(&json!({
            "launches": [], "pads": [], "rockets": [], "legacy": {"v": 1}
        }));
        let mut store = open(&backend);
        store.add(Category::Launches, "x");
        let written = backend.json().unwrap();
        assert_eq!(written["legacy"], json!({"v": 1}));
        assert_eq!(written["launches"], json!(["x"]));
        assert_eq!(store.extras().len(), 1);
    }
}
