// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Favorites State and the validate-then-adopt step for persisted snapshots.

use std::collections::BTreeMap;
use std::ops::Index;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::category::Category;
use crate::error::FavoritesError;

/// Favorited item ids per category.
///
/// Every category is always present, ids are unique within a category and
/// keep insertion order. Only the store mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FavoritesState {
    items: BTreeMap<Category, Vec<String>>,
}

impl Default for FavoritesState {
    fn default() -> Self {
        Self {
            items: Category::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
        }
    }
}

impl FavoritesState {
    /// Ids favorited under `category`, oldest first.
    pub fn get(&self, category: Category) -> &[String] {
        self.items.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `id` is favorited under `category`.
    pub fn contains(&self, category: Category, id: &str) -> bool {
        self.get(category).iter().any(|i| i == id)
    }

    /// True when no category holds any id.
    pub fn is_empty(&self) -> bool {
        self.items.values().all(Vec::is_empty)
    }

    /// Total number of favorited ids across categories.
    pub fn len(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    /// Iterate categories in canonical order with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        self.items.iter().map(|(c, ids)| (*c, ids.as_slice()))
    }

    /// Append `id` unless already present. Returns whether it was added.
    pub(crate) fn insert(&mut self, category: Category, id: &str) -> bool {
        let ids = self.items.entry(category).or_default();
        if ids.iter().any(|i| i == id) {
            return false;
        }
        ids.push(id.to_owned());
        true
    }

    /// Drop every occurrence of `id`. Returns whether anything was removed.
    pub(crate) fn remove(&mut self, category: Category, id: &str) -> bool {
        let ids = self.items.entry(category).or_default();
        let before = ids.len();
        ids.retain(|i| i != id);
        ids.len() != before
    }

    /// Empty one category. Returns whether it held anything.
    pub(crate) fn clear(&mut self, category: Category) -> bool {
        let ids = self.items.entry(category).or_default();
        let had = !ids.is_empty();
        ids.clear();
        had
    }

    /// Validate a persisted snapshot and adopt it whole, or reject it whole.
    ///
    /// Every category must be present and hold an array of strings. Keys
    /// outside the fixed set are split off into [`Hydrated::extras`].
    pub fn from_snapshot(value: &Value) -> Result<Hydrated, FavoritesError> {
        let Value::Object(obj) = value else {
            return Err(FavoritesError::MalformedSnapshot(format!(
                "expected a JSON object, found {}",
                kind_of(value)
            )));
        };

        let mut state = Self::default();
        for category in Category::ALL {
            let raw = obj.get(category.as_str()).ok_or_else(|| {
                FavoritesError::MalformedSnapshot(format!("missing category `{category}`"))
            })?;
            let Value::Array(entries) = raw else {
                return Err(FavoritesError::MalformedSnapshot(format!(
                    "category `{category}` should be an array, found {}",
                    kind_of(raw)
                )));
            };
            for entry in entries {
                let Value::String(id) = entry else {
                    return Err(FavoritesError::MalformedSnapshot(format!(
                        "category `{category}` holds a non-string id ({})",
                        kind_of(entry)
                    )));
                };
                state.insert(category, id);
            }
        }

        let extras = obj
            .iter()
            .filter(|(k, _)| k.parse::<Category>().is_err())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(Hydrated { state, extras })
    }

    /// Persisted form: unknown `extras` first, then every category.
    pub fn to_snapshot(&self, extras: &Map<String, Value>) -> Value {
        let mut obj = extras.clone();
        for (category, ids) in self.iter() {
            obj.insert(
                category.as_str().to_owned(),
                Value::Array(ids.iter().cloned().map(Value::String).collect()),
            );
        }
        Value::Object(obj)
    }
}

impl Index<Category> for FavoritesState {
    type Output = [String];

    fn index(&self, category: Category) -> &Self::Output {
        self.get(category)
    }
}

/// Result of adopting a valid snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Hydrated {
    /// State built from the known categories.
    pub state: FavoritesState,
    /// Keys outside the fixed category set, kept verbatim.
    pub extras: Map<String, Value>,
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
