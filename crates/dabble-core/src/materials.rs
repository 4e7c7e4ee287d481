//! Material index derived from the catalog.

use std::collections::BTreeSet;

use crate::models::Craft;

/// Every distinct material across `crafts`, lowercased and sorted ascending.
///
/// Materials that differ only by case collapse into one entry.
pub fn material_index<'a, I>(crafts: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Craft>,
{
    crafts
        .into_iter()
        .flat_map(|craft| craft.materials.iter())
        .map(|material| material.to_lowercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Entries of `index` containing `term`, compared case-insensitively.
/// An empty term matches everything.
pub fn search_materials<'a>(index: &'a [String], term: &str) -> Vec<&'a str> {
    let term = term.trim().to_lowercase();
    index
        .iter()
        .filter(|material| term.is_empty() || material.to_lowercase().contains(&term))
        .map(String::as_str)
        .collect()
}
