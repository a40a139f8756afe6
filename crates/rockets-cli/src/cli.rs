// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use rockets_favorites::{Category, DEFAULT_STORAGE_KEY};

/// List and edit Space Rockets favorites.
#[derive(Debug, Parser)]
#[command(name = "rockets", version, about)]
pub struct Cli {
    /// Directory holding the favorites snapshot (defaults to the platform data dir).
    #[arg(long, env = "SPACE_ROCKETS_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Storage key the snapshot is saved under.
    #[arg(long, env = "SPACE_ROCKETS_STORAGE_KEY", default_value = DEFAULT_STORAGE_KEY, global = true)]
    pub key: String,

    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show favorited ids.
    List {
        /// Print the persisted snapshot JSON (unknown keys included) instead of a table.
        #[arg(long)]
        json: bool,
        /// Only show one category.
        #[arg(long, short)]
        category: Option<Category>,
    },
    /// Favorite an item.
    Add {
        /// Category name (launches, pads, rockets).
        category: String,
        /// Item id.
        id: String,
    },
    /// Unfavorite an item.
    Remove {
        /// Category name (launches, pads, rockets).
        category: String,
        /// Item id.
        id: String,
    },
    /// Favorite an item, or unfavorite it if already favorited.
    Toggle {
        /// Category.
        category: Category,
        /// Item id.
        id: String,
    },
    /// Remove every favorite, or every favorite in one category.
    Clear {
        /// Category to clear; all when omitted.
        category: Option<Category>,
    },
    /// Print the snapshot file location.
    Path,
}
