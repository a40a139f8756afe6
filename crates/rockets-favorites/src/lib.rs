// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Favorites subsystem for the Space Rockets client.
//! Keeps UI adapters thin: they read a [`FavoritesState`] and call the
//! [`Favorites`] facade; storage lives behind the [`DurableStore`] port.
#![forbid(unsafe_code)]

pub mod category;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod facade;
pub mod panel;
pub mod state;
pub mod storage;
pub mod store;

pub use category::Category;
pub use config::{FavoritesConfig, DEFAULT_STORAGE_KEY};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticsLog};
pub use error::{FavoritesError, StoreError};
pub use facade::{Favorites, SubscriptionId};
pub use panel::{FavoritesPanel, ItemResolver, ItemSummary, Lookup, Section, SectionState};
pub use state::{FavoritesState, Hydrated};
pub use storage::{DurableStore, SnapshotService};
pub use store::{FavoritesStore, Mutation, Persistence};
