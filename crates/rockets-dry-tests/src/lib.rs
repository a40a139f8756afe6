// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for Space Rockets crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`store`] - In-memory durable store fake with failure injection
//! - [`snapshots`] - Persisted-snapshot JSON builders
//! - [`resolver`] - Scriptable remote item resolver

pub mod resolver;
pub mod snapshots;
pub mod store;

// Re-export commonly used items at crate root for convenience
pub use resolver::{FakeResolver, ResolverMode};
pub use snapshots::{not_valid_snapshot, SnapshotBuilder};
pub use store::InMemoryDurableStore;
