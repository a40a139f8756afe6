// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! rockets: command-line access to the persisted Space Rockets favorites.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use rockets_favorites::{Favorites, FavoritesConfig};
use rockets_store_fs::FsDurableStore;
use tracing_subscriber::EnvFilter;

mod cli;
mod output;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = match &cli.data_dir {
        Some(dir) => FsDurableStore::at(dir),
        None => FsDurableStore::new(),
    }
    .context("opening favorites storage")?;

    if matches!(cli.command, Command::Path) {
        println!("{}", store.path_for(&cli.key)?.display());
        return Ok(());
    }

    let config = FavoritesConfig::default().with_storage_key(cli.key.clone());
    let mut favs = Favorites::open(store, &config);
    run(&mut favs, cli.command)
}

fn run(favs: &mut Favorites<FsDurableStore>, command: Command) -> Result<()> {
    match command {
        Command::List { json, category } => {
            if json {
                let snapshot = favs.favorite_items().to_snapshot(favs.store().extras());
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                let table = output::favorites_table(favs.favorite_items(), category);
                println!("{}", table.as_deref().unwrap_or(output::EMPTY_HINT));
            }
        }
        Command::Add { category, id } => {
            let mutation = favs.add_favorite_item(&category, &id)?;
            println!("{}", output::describe("added", &category, &id, mutation));
        }
        Command::Remove { category, id } => {
            let mutation = favs.remove_favorite_item(&category, &id)?;
            println!("{}", output::describe("removed", &category, &id, mutation));
        }
        Command::Toggle { category, id } => {
            let mutation = favs.toggle(category, &id);
            let verb = if favs.is_favorite(category, &id) {
                "added"
            } else {
                "removed"
            };
            println!(
                "{}",
                output::describe(verb, category.as_str(), &id, mutation)
            );
        }
        Command::Clear { category } => {
            let mutation = match category {
                Some(c) => favs.clear(c),
                None => favs.clear_all(),
            };
            let scope = category.map_or("all", |c| c.as_str());
            if mutation.changed {
                println!("cleared {scope}");
            } else {
                println!("{scope}: nothing to clear");
            }
        }
        Command::Path => {}
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
