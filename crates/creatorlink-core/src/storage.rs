//! Key-value storage abstraction.
//!
//! Both the wizard draft and the campaign collection live in a local,
//! synchronous key-value store holding text values. One store instance is
//! one storage scope; two scopes never see each other's keys.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::DomainError;

/// Synchronous local key-value store holding serialized records.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Removes `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), DomainError>;
}

/// Reads and deserializes the JSON record stored under `key`.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the store fails or the stored
/// text is not a valid record of type `T`.
pub fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, DomainError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| DomainError::Infrastructure(format!("corrupt record under {key}: {e}")))
}

/// Serializes `value` as JSON and stores it under `key`.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if serialization or the store fails.
pub fn write_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), DomainError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| DomainError::Infrastructure(format!("serialization failed: {e}")))?;
    store.set(key, &raw)
}
