//! Application store
//!
//! A single LocalStorage slot holds the whole collection as a JSON array,
//! keyed by applicant email. The load path is parse-or-default: an absent or
//! unreadable slot reads as an empty collection, by contract rather than by
//! accident. Writes are whole-collection replacements with no partial-write
//! guarantee; a failed write surfaces as an error and leaves the slot as it
//! was.

use thiserror::Error;

use crate::consts::STORAGE_KEY;
use crate::normalize_email;
use crate::record::ApplicationRecord;

#[cfg(target_arch = "wasm32")]
pub mod local;
pub mod memory;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorageBackend;
pub use memory::MemoryBackend;

/// Store failures that reach the caller
///
/// Unparseable stored data never appears here; the load path recovers it as
/// an empty collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend rejected the write (storage unavailable or quota exceeded)
    #[error("storage write failed: {0}")]
    Write(String),
    /// A record reached `save` without an email to key it by
    #[error("application record has no email")]
    MissingEmail,
    /// The collection could not be serialized
    #[error("could not serialize applications: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Raw slot access the store is built over
///
/// `get` returns whatever the slot currently holds; `set` replaces it
/// wholesale. LocalStorage on the page, a map in tests.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Durable, synchronous persistence of application records keyed by email
pub struct ApplicationStore<B: StorageBackend> {
    backend: B,
    slot: &'static str,
}

impl<B: StorageBackend> ApplicationStore<B> {
    /// Store over the page's standard slot
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            slot: STORAGE_KEY,
        }
    }

    /// Store bound to a different slot
    pub fn with_slot(backend: B, slot: &'static str) -> Self {
        Self { backend, slot }
    }

    /// Load the whole collection; absent or unreadable slots read as empty
    pub fn load_all(&self) -> Vec<ApplicationRecord> {
        let Some(json) = self.backend.get(self.slot) else {
            return Vec::new();
        };
        match serde_json::from_str(&json) {
            Ok(applications) => applications,
            Err(err) => {
                log::warn!("Discarding unreadable application data: {err}");
                Vec::new()
            }
        }
    }

    /// Number of stored applications
    pub fn len(&self) -> usize {
        self.load_all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.load_all().is_empty()
    }

    /// Insert or replace the record for its email
    ///
    /// Replacement matches emails case-insensitively, the same way lookup
    /// does, so the collection never holds two records for one applicant.
    pub fn save(&mut self, record: ApplicationRecord) -> Result<(), StoreError> {
        if record.email.trim().is_empty() {
            return Err(StoreError::MissingEmail);
        }

        let mut applications = self.load_all();
        let key = normalize_email(&record.email);
        if let Some(existing) = applications
            .iter_mut()
            .find(|a| normalize_email(&a.email) == key)
        {
            *existing = record;
        } else {
            applications.push(record);
        }

        let json = serde_json::to_string(&applications)?;
        self.backend.set(self.slot, &json)?;
        log::info!("Saved application ({} on file)", applications.len());
        Ok(())
    }

    /// First record whose email matches, ignoring case
    pub fn find_by_email(&self, email: &str) -> Option<ApplicationRecord> {
        let key = normalize_email(email);
        self.load_all()
            .into_iter()
            .find(|a| normalize_email(&a.email) == key)
    }
}
