//! Best-effort persistence of in-progress field values.
//!
//! A form's drafts live under `prefix + field id` in an injected
//! [`DraftStore`]. Every store failure is logged and swallowed: losing a
//! draft must never block validation, submission or reset.

use crate::error::StoreError;

mod file;
mod memory;

pub use file::FileDraftStore;
pub use memory::MemoryDraftStore;

/// A string key-value surface the drafts are written to.
pub trait DraftStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// A draft store scoped to one form by a key prefix.
#[derive(Debug)]
pub struct DraftKeyspace<S> {
    store: S,
    prefix: String,
}

impl<S: DraftStore> DraftKeyspace<S> {
    pub fn new(store: S, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    pub fn key(&self, field_id: &str) -> String {
        format!("{}{}", self.prefix, field_id)
    }

    /// The saved value for a field. Empty values count as absent.
    pub fn load(&self, field_id: &str) -> Option<String> {
        match self.store.get(&self.key(field_id)) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                log::warn!("Could not read draft for '{}': {}", field_id, e);
                None
            }
        }
    }

    /// Records the current value of a field.
    ///
    /// A key only comes into existence once the field has seen non-empty
    /// input; clearing a field afterwards overwrites the draft with "".
    pub fn save(&mut self, field_id: &str, value: &str) {
        let key = self.key(field_id);
        if value.is_empty() {
            match self.store.get(&key) {
                Ok(None) => return,
                Ok(Some(_)) => {}
                Err(e) => {
                    log::warn!("Could not read draft for '{}': {}", field_id, e);
                    return;
                }
            }
        }
        if let Err(e) = self.store.set(&key, value) {
            log::warn!("Could not save draft for '{}': {}", field_id, e);
        }
    }

    /// Deletes the drafts of every listed field, continuing past failures.
    /// Returns how many removals failed.
    pub fn clear<'a>(&mut self, field_ids: impl IntoIterator<Item = &'a str>) -> usize {
        let mut failures = 0;
        for field_id in field_ids {
            let key = self.key(field_id);
            if let Err(e) = self.store.remove(&key) {
                log::warn!("Could not remove draft for '{}': {}", field_id, e);
                failures += 1;
            }
        }
        failures
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
