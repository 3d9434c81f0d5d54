/// Storage layer for persisting the tracker snapshot
///
/// This module defines the persistence contract: the whole Store is loaded
/// once per invocation and rewritten in full after every successful
/// mutation. The core never sees file paths or bytes, only the trait.

pub mod json;

// Re-export the main storage types
pub use json::*;

use thiserror::Error;

use crate::domain::Store;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait defining the snapshot persistence interface
///
/// This trait allows swapping the JSON file backend for another store while
/// keeping the same interface. A missing snapshot loads as the empty store;
/// a snapshot that exists but cannot be read or parsed must fail loudly
/// rather than silently substituting defaults.
pub trait SnapshotStorage {
    /// Load the full store, or the default empty store if none was saved yet
    fn load(&self) -> Result<Store, StorageError>;

    /// Serialize and durably write the entire store, replacing any prior
    /// snapshot
    fn save(&self, store: &Store) -> Result<(), StorageError>;
}
