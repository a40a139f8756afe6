// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scriptable stand-in for the remote query layer.

use rockets_favorites::{Category, ItemResolver, ItemSummary, Lookup};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// How a category's lookups should behave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverMode {
    /// Return a summary for every requested id.
    Echo,
    /// Report the request as still in flight.
    Pending,
    /// Fail with the given message.
    Fail(String),
}

/// [`ItemResolver`] whose behavior is configured per category.
///
/// Unconfigured categories use [`ResolverMode::Echo`], titling each item
/// `"<label> <id>"` with the remote collection as subtitle. Every call is recorded.
#[derive(Clone, Default)]
pub struct FakeResolver {
    modes: HashMap<Category, ResolverMode>,
    calls: Arc<Mutex<Vec<(Category, Vec<String>)>>>,
}

impl FakeResolver {
    /// Resolver that echoes every category.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the behavior for `category`.
    pub fn with_mode(mut self, category: Category, mode: ResolverMode) -> Self {
        self.modes.insert(category, mode);
        self
    }

    /// Lookups made so far, in call order.
    pub fn calls(&self) -> Vec<(Category, Vec<String>)> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ItemResolver for FakeResolver {
    fn resolve(&self, category: Category, ids: &[String]) -> Lookup {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((category, ids.to_vec()));
        match self.modes.get(&category).unwrap_or(&ResolverMode::Echo) {
            ResolverMode::Echo => Lookup::Ready(
                ids.iter()
                    .map(|id| {
                        ItemSummary::new(category, id.clone(), format!("{} {id}", category.label()))
                            .with_subtitle(category.collection())
                    })
                    .collect(),
            ),
            ResolverMode::Pending => Lookup::Pending,
            ResolverMode::Fail(msg) => Lookup::Failed(msg.clone()),
        }
    }
}
