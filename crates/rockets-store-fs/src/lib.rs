// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed `DurableStore` (uses the platform data dir).

use directories::ProjectDirs;
use rockets_favorites::{DurableStore, StoreError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Store blobs as `<key>.json` files under one directory.
#[derive(Debug, Clone)]
pub struct FsDurableStore {
    base: PathBuf,
}

impl FsDurableStore {
    /// Create a store rooted at the user data directory (e.g., `~/.local/share/spacerockets`).
    pub fn new() -> Result<Self, StoreError> {
        let proj = ProjectDirs::from("dev", "space-rockets", "SpaceRockets")
            .ok_or_else(|| StoreError::Other("could not resolve data dir".into()))?;
        Self::at(proj.data_dir())
    }

    /// Create a store rooted at `base`, creating it if needed.
    pub fn at(base: impl AsRef<Path>) -> Result<Self, StoreError> {
        let base = base.as_ref().to_path_buf();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    /// Directory holding the blobs.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// File a key is stored in.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(StoreError::Other(format!("invalid storage key `{key}`")));
        }
        Ok(self.base.join(format!("{key}.json")))
    }
}

impl DurableStore for FsDurableStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read(path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(StoreError::NotFound),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    // Write-then-rename so a crash mid-write never leaves a torn snapshot.
    // The temp file is removed on drop if any step fails.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.base)?;
        let mut tmp = NamedTempFile::new_in(&self.base)?;
        tmp.write_all(data)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|err| StoreError::Io(err.error))?;
        Ok(())
    }
}
