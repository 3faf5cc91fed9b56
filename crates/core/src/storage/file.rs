//! File-backed storage

use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::trace;

use super::{KeyValueStorage, StorageError};

/// Storage persisted as a JSON object of string values in a single file.
///
/// A missing file reads as empty storage. Writes go through a sibling temporary file and a
/// rename so a crash never leaves a half-written file behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Use the file at `path`, which need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_slots(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(BTreeMap::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(StorageError::Corrupt),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(error) => Err(StorageError::Io(error)),
        }
    }

    fn write_slots(&self, slots: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(slots).map_err(StorageError::Corrupt)?;

        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);

        fs::write(&staging, contents)?;
        fs::rename(&staging, &self.path)?;

        trace!(path = %self.path.display(), slots = slots.len(), "storage file written");

        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_slots()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking every future write.
        let mut slots = match self.read_slots() {
            Ok(slots) => slots,
            Err(StorageError::Corrupt(_)) => BTreeMap::new(),
            Err(error) => return Err(error),
        };

        slots.insert(key.to_string(), value.to_string());

        self.write_slots(&slots)
    }
}
