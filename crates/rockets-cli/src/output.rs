// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Human-readable rendering of favorites.

use comfy_table::{presets::UTF8_FULL, Table};
use rockets_favorites::{Category, FavoritesState, Mutation};

/// Shown when nothing is favorited.
pub const EMPTY_HINT: &str = "No favorites yet. Browse /launches, /launch-pads or /rockets.";

/// Table of favorites, optionally restricted to one category.
pub fn favorites_table(state: &FavoritesState, only: Option<Category>) -> Option<String> {
    let rows: Vec<_> = state
        .iter()
        .filter(|(c, _)| only.is_none_or(|o| o == *c))
        .flat_map(|(c, ids)| {
            ids.iter()
                .enumerate()
                .map(move |(i, id)| (c, i + 1, id.as_str()))
        })
        .collect();
    if rows.is_empty() {
        return None;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Category", "#", "Id"]);
    for (c, n, id) in rows {
        table.add_row(vec![c.label().to_owned(), n.to_string(), id.to_owned()]);
    }
    Some(table.to_string())
}

/// One-line summary of a mutation.
pub fn describe(verb: &str, category: &str, id: &str, mutation: Mutation) -> String {
    let mut line = if mutation.changed {
        format!("{verb} {category}/{id}")
    } else {
        format!("{category}/{id} unchanged")
    };
    if !mutation.persisted {
        line.push_str(" (not saved; favorites are in memory only)");
    }
    line
}
