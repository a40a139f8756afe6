// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! View model for the "My Favorites" panel.
//!
//! Favorited ids are resolved to displayable summaries through an
//! [`ItemResolver`] (the remote query layer). Each category section loads and
//! fails on its own; one broken section never hides the others.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::state::FavoritesState;

/// Displayable summary of one favorited item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    /// Remote document id.
    pub id: String,
    /// Heading line (e.g. launch name and flight number).
    pub title: String,
    /// Secondary line (e.g. rockets served by a pad).
    pub subtitle: Option<String>,
    /// Route of the item's detail page.
    pub detail_route: String,
}

impl ItemSummary {
    /// Summary with the detail route derived from `category`.
    pub fn new(category: Category, id: impl Into<String>, title: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            detail_route: category.detail_route(&id),
            id,
            title: title.into(),
            subtitle: None,
        }
    }

    /// Attach a secondary line.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

/// Result of asking the remote layer for a batch of ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Request still in flight.
    Pending,
    /// Documents arrived.
    Ready(Vec<ItemSummary>),
    /// Request failed.
    Failed(String),
}

/// Remote query collaborator: resolves favorited ids to summaries.
pub trait ItemResolver {
    /// Look up `ids` in the collection backing `category`.
    fn resolve(&self, category: Category, ids: &[String]) -> Lookup;
}

/// Load state of one panel section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionState {
    /// Spinner: request in flight, or no documents returned yet.
    Loading,
    /// Items in the order they were favorited.
    Ready(Vec<ItemSummary>),
    /// Generic error affordance for this section only.
    Failed(String),
}

/// One category's block in the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Category shown.
    pub category: Category,
    /// Section heading.
    pub heading: &'static str,
    /// Load state.
    pub state: SectionState,
}

/// Link shown in the empty panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseLink {
    /// Button text.
    pub label: &'static str,
    /// Target route.
    pub route: &'static str,
}

/// Whole-panel view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesPanel {
    /// Nothing favorited yet: prompt to browse.
    Empty {
        /// Prompt text.
        prompt: &'static str,
        /// One link per category.
        browse: Vec<BrowseLink>,
    },
    /// One section per non-empty category.
    Sections(Vec<Section>),
}

const EMPTY_PROMPT: &str = "Empty list, how about adding to favorites?";

impl FavoritesPanel {
    /// Build the panel from the current favorites.
    pub fn build<R>(state: &FavoritesState, resolver: &R) -> Self
    where
        R: ItemResolver + ?Sized,
    {
        if state.is_empty() {
            return Self::Empty {
                prompt: EMPTY_PROMPT,
                browse: Category::ALL
                    .into_iter()
                    .map(|c| BrowseLink {
                        label: c.label(),
                        route: c.browse_route(),
                    })
                    .collect(),
            };
        }

        let sections = state
            .iter()
            .filter(|(_, ids)| !ids.is_empty())
            .map(|(category, ids)| {
                let load = match resolver.resolve(category, ids) {
                    Lookup::Pending => SectionState::Loading,
                    // No documents back yet for a non-empty list still shows the spinner.
                    Lookup::Ready(items) if items.is_empty() => SectionState::Loading,
                    Lookup::Ready(items) => SectionState::Ready(order_by_ids(items, ids)),
                    Lookup::Failed(msg) => {
                        tracing::debug!(%category, error = %msg, "favorites section failed to load");
                        SectionState::Failed(msg)
                    }
                };
                Section {
                    category,
                    heading: category.label(),
                    state: load,
                }
            })
            .collect();
        Self::Sections(sections)
    }

    /// Section for `category`, if shown.
    pub fn section(&self, category: Category) -> Option<&Section> {
        match self {
            Self::Empty { .. } => None,
            Self::Sections(sections) => sections.iter().find(|s| s.category == category),
        }
    }
}

// Remote results come back in arbitrary order; show them in favorite order.
// Ids the remote side did not return are left out.
fn order_by_ids(mut items: Vec<ItemSummary>, ids: &[String]) -> Vec<ItemSummary> {
    items.sort_by_key(|item| ids.iter().position(|id| *id == item.id).unwrap_or(usize::MAX));
    items
}
