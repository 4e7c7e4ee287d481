//! Session context tying the catalog, the filter and the saved set together.
//!
//! A [`Session`] is what a front end holds for the lifetime of one user
//! session. It is passed explicitly to whoever needs it; the match engine
//! stays a pure function that the session calls with its current state.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Front end     │    │     Session     │    │  Match engine   │
//! │ (CLI, UI, ...)  │───▶│ catalog, filter │───▶│  (pure rank)    │
//! │                 │    │   saved set     │───▶│  Saved store    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use dabble_core::SessionBuilder;
//!
//! # fn example() -> dabble_core::Result<()> {
//! let mut session = SessionBuilder::new().build_in_memory()?;
//!
//! session.filter_mut().toggle_have("origami paper");
//! let ranked = session.ranked();
//! assert!(!ranked.perfect.is_empty());
//!
//! let _ = session.toggle_save(3);
//! assert!(session.is_saved(3));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::collections::BTreeSet;

use crate::{
    catalog::Catalog,
    display::SavedCrafts,
    error::{DabbleError, Result},
    matcher::rank,
    models::{Craft, FilterState, RankedCrafts},
    store::{KeyValueStore, SavedSet, StoreOutcome},
};

pub mod builder;


pub use builder::SessionBuilder;

/// Catalog, current filter and saved set for one user session.
pub struct Session<S> {
    catalog: Catalog,
    filter: FilterState,
    saved: SavedSet<S>,
}

impl<S: KeyValueStore> Session<S> {
    /// Creates a session with an empty filter.
    pub fn new(catalog: Catalog, backend: S) -> Self {
        Self {
            catalog,
            filter: FilterState::default(),
            saved: SavedSet::new(backend),
        }
    }

    /// The read-only catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current filter.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Mutable access to the current filter.
    pub fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    /// Replaces the current filter.
    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    /// Ranks the catalog against the current filter.
    pub fn ranked(&self) -> RankedCrafts<'_> {
        rank(&self.catalog, &self.filter)
    }

    /// Every material in the catalog, lowercased and sorted.
    pub fn materials(&self) -> Vec<String> {
        self.catalog.materials()
    }

    /// Looks up a craft by identifier.
    pub fn craft(&self, id: u64) -> Option<&Craft> {
        self.catalog.get(id)
    }

    /// Looks up a craft, failing with [`DabbleError::CraftNotFound`].
    pub fn require_craft(&self, id: u64) -> Result<&Craft> {
        self.catalog
            .get(id)
            .ok_or(DabbleError::CraftNotFound { id })
    }

    /// True if the craft is saved.
    pub fn is_saved(&self, id: u64) -> bool {
        self.saved.contains(id)
    }

    /// Saves a craft.
    pub fn save(&mut self, id: u64) -> StoreOutcome {
        self.saved.add(id)
    }

    /// Unsaves a craft.
    pub fn unsave(&mut self, id: u64) -> StoreOutcome {
        self.saved.remove(id)
    }

    /// Saves the craft if unsaved, unsaves it otherwise.
    pub fn toggle_save(&mut self, id: u64) -> StoreOutcome {
        self.saved.toggle(id)
    }

    /// Forgets every saved craft.
    pub fn clear_saved(&mut self) -> StoreOutcome {
        self.saved.clear()
    }

    /// Saved identifiers, including any that are not in the catalog.
    pub fn saved_ids(&self) -> BTreeSet<u64> {
        self.saved.load()
    }

    /// Saved crafts in catalog order.
    pub fn saved_crafts(&self) -> SavedCrafts<'_> {
        SavedCrafts(self.catalog.saved_crafts(&self.saved.load()))
    }

    /// The underlying saved set.
    pub fn saved_set(&self) -> &SavedSet<S> {
        &self.saved
    }
}
