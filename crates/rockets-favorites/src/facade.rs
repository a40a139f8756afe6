// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Favorites Access Facade: the read/mutate surface UI code talks to.
//!
//! The application root owns one [`Favorites`] and hands out borrows of it.
//! Every committed mutation notifies all subscribers synchronously, in
//! subscription order, before the mutating call returns, so no indicator can
//! observe a stale state after another one has updated.

use crate::category::Category;
use crate::config::FavoritesConfig;
use crate::diagnostics::DiagnosticsLog;
use crate::error::FavoritesError;
use crate::state::FavoritesState;
use crate::storage::DurableStore;
use crate::store::{FavoritesStore, Mutation, Persistence};

/// Handle returned by [`Favorites::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&FavoritesState)>;

/// Favorites store plus its subscribers.
pub struct Favorites<S> {
    store: FavoritesStore<S>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<S> Favorites<S>
where
    S: DurableStore,
{
    /// Open the underlying store (hydrating from `backend`) with no subscribers.
    pub fn open(backend: S, config: &FavoritesConfig) -> Self {
        Self::new(FavoritesStore::open(backend, config))
    }

    /// `addFavoriteItem`: favorite `id` under the category named `category`.
    pub fn add_favorite_item(
        &mut self,
        category: &str,
        id: &str,
    ) -> Result<Mutation, FavoritesError> {
        let mutation = self.store.add_by_name(category, id)?;
        self.notify();
        Ok(mutation)
    }

    /// `removeFavoriteItem`: unfavorite `id` under the category named `category`.
    pub fn remove_favorite_item(
        &mut self,
        category: &str,
        id: &str,
    ) -> Result<Mutation, FavoritesError> {
        let mutation = self.store.remove_by_name(category, id)?;
        self.notify();
        Ok(mutation)
    }

    /// Typed add.
    pub fn add(&mut self, category: Category, id: &str) -> Mutation {
        let mutation = self.store.add(category, id);
        self.notify();
        mutation
    }

    /// Typed remove.
    pub fn remove(&mut self, category: Category, id: &str) -> Mutation {
        let mutation = self.store.remove(category, id);
        self.notify();
        mutation
    }

    /// Favorite-button behavior: remove if favorited, else add.
    pub fn toggle(&mut self, category: Category, id: &str) -> Mutation {
        let mutation = self.store.toggle(category, id);
        self.notify();
        mutation
    }

    /// Empty one category.
    pub fn clear(&mut self, category: Category) -> Mutation {
        let mutation = self.store.clear(category);
        self.notify();
        mutation
    }

    /// Empty every category.
    pub fn clear_all(&mut self) -> Mutation {
        let mutation = self.store.clear_all();
        self.notify();
        mutation
    }
}

impl<S> Favorites<S> {
    /// Wrap an already-open store.
    pub fn new(store: FavoritesStore<S>) -> Self {
        Self {
            store,
            listeners: Vec::new(),
            next_id: 1,
        }
    }

    /// `favoriteItems`: the current state.
    pub fn favorite_items(&self) -> &FavoritesState {
        self.store.state()
    }

    /// Whether `id` is favorited under `category`.
    pub fn is_favorite(&self, category: Category, id: &str) -> bool {
        self.store.is_favorite(category, id)
    }

    /// Register a listener called after every committed mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&FavoritesState) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Current persistence mode of the underlying store.
    pub fn persistence(&self) -> Persistence {
        self.store.persistence()
    }

    /// Diagnostics recorded by the store.
    pub fn diagnostics(&self) -> &DiagnosticsLog {
        self.store.diagnostics()
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &FavoritesStore<S> {
        &self.store
    }

    // Fires for no-op mutations too; the snapshot was still rewritten.
    fn notify(&mut self) {
        let state = self.store.state();
        for (_, listener) in &mut self.listeners {
            listener(state);
        }
    }
}
