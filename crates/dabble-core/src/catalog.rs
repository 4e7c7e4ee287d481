//! The read-only craft catalog.
//!
//! A [`Catalog`] is loaded once per session, either from the JSON asset
//! bundled with the crate or from a file, and never changes afterwards.

use std::{
    collections::{BTreeSet, HashSet},
    fs,
    path::Path,
};

use log::debug;

use crate::{
    error::{DabbleError, Result},
    materials::material_index,
    models::Craft,
};

const BUILTIN_CATALOG: &str = include_str!("../assets/crafts.json");

/// Immutable, ordered collection of crafts with unique identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    crafts: Vec<Craft>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate identifiers and zero durations.
    pub fn new(crafts: Vec<Craft>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(crafts.len());
        for craft in &crafts {
            if !ids.insert(craft.id) {
                return Err(DabbleError::invalid_craft(craft.id, "duplicate ID"));
            }
            if craft.time_minutes == 0 {
                return Err(DabbleError::invalid_craft(
                    craft.id,
                    "time must be a positive number of minutes",
                ));
            }
        }
        Ok(Self { crafts })
    }

    /// Parses a catalog from a JSON array of craft records.
    pub fn from_json(json: &str) -> Result<Self> {
        let crafts: Vec<Craft> = serde_json::from_str(json)?;
        Self::new(crafts)
    }

    /// Reads and parses a catalog file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DabbleError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let catalog = Self::from_json(&content)?;
        debug!("Loaded {} crafts from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Looks up a craft by identifier.
    pub fn get(&self, id: u64) -> Option<&Craft> {
        self.crafts.iter().find(|craft| craft.id == id)
    }

    /// Iterates over the crafts in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Craft> {
        self.crafts.iter()
    }

    /// Number of crafts in the catalog.
    pub fn len(&self) -> usize {
        self.crafts.len()
    }

    /// True for a catalog without crafts.
    pub fn is_empty(&self) -> bool {
        self.crafts.is_empty()
    }

    /// All distinct materials, lowercased and sorted.
    pub fn materials(&self) -> Vec<String> {
        material_index(&self.crafts)
    }

    /// Crafts whose identifier is in `ids`, in catalog order. Identifiers with
    /// no matching craft are skipped.
    pub fn saved_crafts(&self, ids: &BTreeSet<u64>) -> Vec<&Craft> {
        self.crafts
            .iter()
            .filter(|craft| ids.contains(&craft.id))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Craft;
    type IntoIter = std::slice::Iter<'a, Craft>;

    fn into_iter(self) -> Self::IntoIter {
        self.crafts.iter()
    }
}
