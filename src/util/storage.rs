//! Key-value storage for the persisted session marker.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session gate reads the marker once on mount; collaborator views write
//! or clear it after sign-in and sign-out. Browser builds back this with
//! `window.localStorage`, everything else (tests, native builds) uses the
//! in-process [`MemoryStore`].
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns [`StoreError`] instead of swallowing failures. The
//! gate decides what an error means (it treats a failed read as "no session").

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Error returned by [`MarkerStore`] operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No storage backend is reachable (no window, or storage disabled).
    #[error("marker storage is unavailable")]
    Unavailable,
    /// The backend rejected a read of `key`.
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    /// The backend rejected a write or removal of `key`.
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Durable string key-value store holding the session marker.
pub trait MarkerStore: Send + Sync {
    /// Read the value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process store used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.lock().insert(key.to_owned(), value.to_owned());
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MarkerStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.lock().remove(key);
        Ok(())
    }
}

/// `window.localStorage` backed store. Holds no handle; the storage object is
/// looked up on every call so the value stays `Send + Sync`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

#[cfg(feature = "csr")]
impl MarkerStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_owned(),
            reason: format!("{e:?}"),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_owned(),
            reason: format!("{e:?}"),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?.remove_item(key).map_err(|e| StoreError::Write {
            key: key.to_owned(),
            reason: format!("{e:?}"),
        })
    }
}

/// Store used by the app shell when the host supplies none.
#[must_use]
pub fn default_store() -> std::sync::Arc<dyn MarkerStore> {
    #[cfg(feature = "csr")]
    {
        std::sync::Arc::new(BrowserStore)
    }
    #[cfg(not(feature = "csr"))]
    {
        std::sync::Arc::new(MemoryStore::new())
    }
}
