// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted-snapshot fixtures.

use rockets_favorites::Category;
use serde_json::{json, Map, Value};

/// Builder for snapshot JSON, valid or deliberately broken.
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    obj: Map<String, Value>,
}

impl SnapshotBuilder {
    /// Every category present and empty.
    pub fn new() -> Self {
        let mut obj = Map::new();
        for c in Category::ALL {
            obj.insert(c.as_str().to_owned(), json!([]));
        }
        Self { obj }
    }

    /// Replace the ids of `category`.
    pub fn ids(mut self, category: Category, ids: &[&str]) -> Self {
        self.obj.insert(category.as_str().to_owned(), json!(ids));
        self
    }

    /// Drop a required category key.
    pub fn without(mut self, category: Category) -> Self {
        self.obj.remove(category.as_str());
        self
    }

    /// Set an arbitrary key (unknown category, wrong type, ...).
    pub fn raw(mut self, key: &str, value: Value) -> Self {
        self.obj.insert(key.to_owned(), value);
        self
    }

    /// Finished JSON document.
    pub fn build(self) -> Value {
        Value::Object(self.obj)
    }
}

/// The wrong-shape document the original app guards against.
pub fn not_valid_snapshot() -> Value {
    json!({"notValid": true})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_all_empty() {
        assert_eq!(
            SnapshotBuilder::new().build(),
            json!({"launches": [], "pads": [], "rockets": []})
        );
    }

    #[test]
    fn without_removes_required_key() {
        let snap = SnapshotBuilder::new()
            .ids(Category::Launches, &["1"])
            .without(Category::Pads)
            .build();
        assert_eq!(snap, json!({"launches": ["1"], "rockets": []}));
    }
}
