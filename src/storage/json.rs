/// JSON file implementation of the snapshot storage interface
///
/// The snapshot is a single pretty-printed JSON file holding the whole
/// Store. Saves go through a sibling temp file followed by a rename, so an
/// interrupted write leaves the previous snapshot intact.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Store;
use crate::storage::{SnapshotStorage, StorageError};

/// JSON-file-backed snapshot storage
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Create a storage handle for the given snapshot file
    ///
    /// The file itself is created lazily on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStorage for JsonStorage {
    fn load(&self) -> Result<Store, StorageError> {
        if !self.path.exists() {
            tracing::debug!("no snapshot at {:?}, starting empty", self.path);
            return Ok(Store::default());
        }

        let contents = fs::read_to_string(&self.path)?;
        let store: Store = serde_json::from_str(&contents)?;

        tracing::debug!(
            "loaded snapshot from {:?} ({} habits)",
            self.path,
            store.habits.len()
        );
        Ok(store)
    }

    fn save(&self, store: &Store) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(store)?;

        // Write to a temp file first so a failed save can't corrupt the
        // existing snapshot
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("saved snapshot to {:?}", self.path);
        Ok(())
    }
}
