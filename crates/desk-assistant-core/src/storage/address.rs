//! Device address storage.
//!
//! The address is the only durable client state. It lives in a small JSON
//! settings file as a single key-value entry.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::StorageError;

/// Settings file name inside the data directory
const SETTINGS_FILE: &str = "settings.json";

/// Key under which the device address is stored
pub const ADDRESS_KEY: &str = "device_address";

/// File-backed store for the device address.
///
/// Takes a `PathBuf` in the constructor so each consumer (CLI, tests) can
/// provide the correct storage path.
#[derive(Debug, Clone)]
pub struct AddressStore {
    path: PathBuf,
}

impl AddressStore {
    /// Create a new AddressStore in the given directory.
    pub fn new(dir: PathBuf) -> Result<Self, StorageError> {
        std::fs::create_dir_all(&dir).map_err(|e| {
            StorageError::DirectoryAccess(format!("{}: {}", dir.display(), e))
        })?;

        Ok(Self {
            path: dir.join(SETTINGS_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// Load the stored address. `None` means nothing was ever saved.
    pub async fn load(&self) -> Result<Option<String>, StorageError> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(ADDRESS_KEY))
    }

    /// Save the address, overwriting any previous value.
    pub async fn save(&self, address: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries().await?;
        entries.insert(ADDRESS_KEY.to_string(), address.to_string());

        let content = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, content).await?;

        Ok(())
    }
}
