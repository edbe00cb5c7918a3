//! LocalStorage backend (browser only)

use super::{StorageBackend, StoreError};

/// Browser LocalStorage, resolved fresh on every call
///
/// Resolution can fail (storage disabled, sandboxed frame); reads then see
/// an absent slot and writes report the failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage()
            .ok_or_else(|| StoreError::Write("LocalStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Write(format!("{err:?}")))
    }
}
