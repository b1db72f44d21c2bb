use super::DraftStore;
use crate::error::StoreError;
use ahash::AHashMap;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use std::fs;
use std::path::{Path, PathBuf};

/// Draft store persisted to a single bincode file.
///
/// The whole map is rewritten on every change; a form has a handful of
/// short fields.
#[derive(Debug)]
pub struct FileDraftStore {
    path: PathBuf,
    entries: AHashMap<String, String>,
}

impl FileDraftStore {
    /// Opens the store at `path`, starting empty if the file does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let bytes = fs::read(&path)?;
            Self::decode(&bytes)?
        } else {
            AHashMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(bytes: &[u8]) -> Result<AHashMap<String, String>, StoreError> {
        decode_from_slice(bytes, standard())
            .map(|(entries, _)| entries)
            .map_err(|e| StoreError::Codec(format!("Deserialization failed: {}", e)))
    }

    fn flush(&self) -> Result<(), StoreError> {
        let bytes = encode_to_vec(&self.entries, standard())
            .map_err(|e| StoreError::Codec(format!("Serialization failed: {}", e)))?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl DraftStore for FileDraftStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    /// The entry is only dropped from memory once the file no longer holds
    /// it, so a failed removal can be retried.
    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.flush() {
            self.entries.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}
