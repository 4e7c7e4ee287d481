//! Persisted set of saved craft identifiers.
//!
//! The saved set lives in a single named slot of a [`KeyValueStore`] as a
//! plain JSON array of integers, for example `[3,1,8]`. There is no envelope
//! and no version field.
//!
//! [`SavedSet`] never returns an error. A missing or unparseable slot reads as
//! an empty set, and a backend failure during a mutation is logged and
//! reported as [`StoreOutcome::Failed`] while the stored value stays as it
//! was.
//!
//! Backends:
//!
//! - [`Database`]: SQLite file, durable across restarts
//! - [`MemoryStore`]: process-local map

use std::collections::BTreeSet;

use log::{debug, info, warn};

use crate::error::Result;

mod memory;
mod sqlite;


pub use memory::MemoryStore;
pub use sqlite::Database;

/// Slot name holding the saved craft identifiers.
pub const SAVED_CRAFTS_KEY: &str = "dabble_saved_crafts";

/// Durable string slots addressed by key.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<()>;
}

/// What a saved-set mutation did.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The stored set changed
    Changed,
    /// The request was already satisfied; nothing was written
    Unchanged,
    /// The backend failed; the stored set is as it was before the call
    Failed,
}

impl StoreOutcome {
    /// True if the backend reported a failure.
    pub fn is_failed(&self) -> bool {
        matches!(self, StoreOutcome::Failed)
    }
}

/// Saved craft identifiers on top of a key-value backend.
pub struct SavedSet<S> {
    backend: S,
}

impl<S: KeyValueStore> SavedSet<S> {
    /// Wraps a backend. Nothing is read until the first call.
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Mutable access to the underlying backend.
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Current saved identifiers. Absent, malformed or unreadable state
    /// yields an empty set.
    pub fn load(&self) -> BTreeSet<u64> {
        match self.read_ids() {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                warn!("Failed to read saved crafts: {e}");
                BTreeSet::new()
            }
        }
    }

    /// True if `id` is currently saved.
    pub fn contains(&self, id: u64) -> bool {
        self.load().contains(&id)
    }

    /// Saves `id`. Saving an already saved id writes nothing.
    pub fn add(&mut self, id: u64) -> StoreOutcome {
        let mut ids = match self.read_ids() {
            Ok(ids) => ids,
            Err(e) => {
                warn!("Failed to save craft {id}: {e}");
                return StoreOutcome::Failed;
            }
        };
        if ids.contains(&id) {
            return StoreOutcome::Unchanged;
        }
        ids.push(id);

        match self.write_ids(&ids) {
            Ok(()) => {
                info!("Saved craft {id}");
                StoreOutcome::Changed
            }
            Err(e) => {
                warn!("Failed to save craft {id}: {e}");
                StoreOutcome::Failed
            }
        }
    }

    /// Unsaves `id`. Removing an id that is not saved writes nothing.
    pub fn remove(&mut self, id: u64) -> StoreOutcome {
        let mut ids = match self.read_ids() {
            Ok(ids) => ids,
            Err(e) => {
                warn!("Failed to unsave craft {id}: {e}");
                return StoreOutcome::Failed;
            }
        };
        let before = ids.len();
        ids.retain(|saved| *saved != id);
        if ids.len() == before {
            return StoreOutcome::Unchanged;
        }

        match self.write_ids(&ids) {
            Ok(()) => {
                info!("Unsaved craft {id}");
                StoreOutcome::Changed
            }
            Err(e) => {
                warn!("Failed to unsave craft {id}: {e}");
                StoreOutcome::Failed
            }
        }
    }

    /// Saves `id` if it is not saved, unsaves it otherwise.
    pub fn toggle(&mut self, id: u64) -> StoreOutcome {
        if self.contains(id) {
            self.remove(id)
        } else {
            self.add(id)
        }
    }

    /// Drops the persisted slot entirely. Clearing when no slot exists
    /// writes nothing.
    pub fn clear(&mut self) -> StoreOutcome {
        match self.backend.get(SAVED_CRAFTS_KEY) {
            Ok(None) => return StoreOutcome::Unchanged,
            Ok(Some(_)) => {}
            Err(e) => {
                warn!("Failed to clear saved crafts: {e}");
                return StoreOutcome::Failed;
            }
        }

        match self.backend.delete(SAVED_CRAFTS_KEY) {
            Ok(()) => {
                info!("Cleared saved crafts");
                StoreOutcome::Changed
            }
            Err(e) => {
                warn!("Failed to clear saved crafts: {e}");
                StoreOutcome::Failed
            }
        }
    }

    // Backend errors propagate; a payload that is not an array of
    // non-negative integers reads as empty. Duplicates keep their first
    // position.
    fn read_ids(&self) -> Result<Vec<u64>> {
        let Some(raw) = self.backend.get(SAVED_CRAFTS_KEY)? else {
            debug!("No saved crafts stored yet");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<u64>>(&raw) {
            Ok(ids) => {
                let mut unique = Vec::with_capacity(ids.len());
                for id in ids {
                    if !unique.contains(&id) {
                        unique.push(id);
                    }
                }
                Ok(unique)
            }
            Err(e) => {
                warn!("Ignoring malformed saved crafts payload: {e}");
                Ok(Vec::new())
            }
        }
    }

    fn write_ids(&mut self, ids: &[u64]) -> Result<()> {
        let payload = serde_json::to_string(ids)?;
        self.backend.set(SAVED_CRAFTS_KEY, &payload)
    }
}
