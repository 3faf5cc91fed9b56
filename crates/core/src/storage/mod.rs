//! Durable key-value storage
//!
//! The cart persists itself into a single string slot of a [`KeyValueStorage`]. Backends
//! are synchronous: a write returns only once the value is visible to the next `get`.

use std::io;

use mockall::automock;
use thiserror::Error;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage backend errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backing file could not be read or written
    #[error("storage I/O failed")]
    Io(#[from] io::Error),

    /// Backing file exists but is not a JSON object of strings
    #[error("storage file is corrupt")]
    Corrupt(#[source] serde_json::Error),

    /// Backend refused the write
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// String-keyed durable storage slot, e.g. browser local storage.
#[automock]
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
