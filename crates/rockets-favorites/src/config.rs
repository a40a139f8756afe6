// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Runtime configuration for the favorites store.

use serde::{Deserialize, Serialize};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "space_rockets_favorites";

/// Default capacity of the diagnostics log.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 32;

/// Settings for opening a [`FavoritesStore`](crate::store::FavoritesStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavoritesConfig {
    /// Key the snapshot is stored under.
    pub storage_key: String,
    /// Maximum number of diagnostics retained in memory.
    pub diagnostics_capacity: usize,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            diagnostics_capacity: DEFAULT_DIAGNOSTICS_CAPACITY,
        }
    }
}

impl FavoritesConfig {
    /// Override the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
