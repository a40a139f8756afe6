// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The closed set of favoritable item kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FavoritesError;

/// A favoritable kind of item.
///
/// The set is fixed at build time; adding a variant is a schema change for
/// persisted snapshots (older snapshots will fail validation and reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Individual launches.
    Launches,
    /// Launch pads.
    Pads,
    /// Rocket models.
    Rockets,
}

impl Category {
    /// Every category, in canonical order.
    pub const ALL: [Self; 3] = [Self::Launches, Self::Pads, Self::Rockets];

    /// Key used in persisted snapshots and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Launches => "launches",
            Self::Pads => "pads",
            Self::Rockets => "rockets",
        }
    }

    /// Collection name on the remote query API.
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Launches => "launches",
            Self::Pads => "launchpads",
            Self::Rockets => "rockets",
        }
    }

    /// Human-facing section heading.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Launches => "Launches",
            Self::Pads => "Launch Pads",
            Self::Rockets => "Rockets",
        }
    }

    /// Route of the browse page for this category.
    pub const fn browse_route(self) -> &'static str {
        match self {
            Self::Launches => "/launches",
            Self::Pads => "/launch-pads",
            Self::Rockets => "/rockets",
        }
    }

    /// Route of the detail page for one item.
    pub fn detail_route(self, id: &str) -> String {
        format!("{}/{id}", self.browse_route())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FavoritesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| FavoritesError::InvalidCategory(s.to_owned()))
    }
}
