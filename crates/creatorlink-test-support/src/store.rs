//! Test stores — mock `KeyValueStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use creatorlink_core::error::DomainError;
use creatorlink_core::storage::KeyValueStore;

/// A single write observed by a `RecordingStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreWrite {
    /// `set(key, value)` was called.
    Set(String, String),
    /// `remove(key)` was called.
    Remove(String),
}

/// An in-memory store that records every write in call order.
#[derive(Debug, Default)]
pub struct RecordingStore {
    entries: Mutex<HashMap<String, String>>,
    writes: Mutex<Vec<StoreWrite>>,
}

impl RecordingStore {
    /// Create an empty recording store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every write so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn writes(&self) -> Vec<StoreWrite> {
        self.writes.lock().unwrap().clone()
    }

    /// Returns the number of writes touching `key`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn writes_to(&self, key: &str) -> usize {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .filter(|w| match w {
                StoreWrite::Set(k, _) | StoreWrite::Remove(k) => k == key,
            })
            .count()
    }
}

impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        self.writes
            .lock()
            .unwrap()
            .push(StoreWrite::Set(key.to_owned(), value.to_owned()));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DomainError> {
        self.entries.lock().unwrap().remove(key);
        self.writes
            .lock()
            .unwrap()
            .push(StoreWrite::Remove(key.to_owned()));
        Ok(())
    }
}

/// A store that fails every operation with an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::Infrastructure("storage unavailable".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("storage unavailable".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("storage unavailable".into()))
    }
}
