// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types for the favorites subsystem.

use thiserror::Error;

/// Error type for durable store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// Error type for favorites operations.
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// Mutation requested for a category outside the fixed set.
    #[error("unknown favorites category `{0}`")]
    InvalidCategory(String),
    /// Persisted data failed shape validation.
    #[error("malformed favorites snapshot: {0}")]
    MalformedSnapshot(String),
    /// Underlying durable store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
