//! Session Store
//!
//! Read/write/clear of the single persisted session record. Raw key-value
//! access is split out into `StorageBackend` so the browser binding only has
//! to move strings around; JSON encoding lives here.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::Session;
use crate::error::StoreError;

/// Persisted session record
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>, StoreError>;
    fn save(&self, session: &Session) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// String key-value storage (localStorage or an in-memory map)
pub trait StorageBackend: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// Session stored as JSON under one key of a `StorageBackend`
#[derive(Debug, Clone)]
pub struct KeyedSessionStore<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> KeyedSessionStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }
}

impl<B: StorageBackend> SessionStore for KeyedSessionStore<B> {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        let Some(raw) = self.backend.get_item(&self.key)? else {
            return Ok(None);
        };
        let session = serde_json::from_str(&raw)?;
        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let raw = serde_json::to_string(session).map_err(|e| StoreError::Write(e.to_string()))?;
        self.backend.set_item(&self.key, &raw)?;
        log::debug!("[SESSION] Saved session under '{}'", self.key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove_item(&self.key)?;
        log::debug!("[SESSION] Cleared '{}'", self.key);
        Ok(())
    }
}

/// In-memory storage; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.items
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Session store backed by `MemoryStorage`
pub type MemorySessionStore = KeyedSessionStore<MemoryStorage>;

impl MemorySessionStore {
    pub fn in_memory(key: impl Into<String>) -> Self {
        KeyedSessionStore::new(MemoryStorage::new(), key)
    }
}

/// Read the session, treating an unreadable record as logged out.
///
/// A malformed record is removed so the next login starts clean.
pub fn read_session(store: &dyn SessionStore) -> Option<Session> {
    match store.load() {
        Ok(session) => session,
        Err(StoreError::Malformed(msg)) => {
            log::warn!("[SESSION] Discarding malformed session: {}", msg);
            if let Err(e) = store.clear() {
                log::error!("[SESSION] Failed to clear malformed session: {}", e);
            }
            None
        }
        Err(e) => {
            log::error!("[SESSION] Failed to read session: {}", e);
            None
        }
    }
}
