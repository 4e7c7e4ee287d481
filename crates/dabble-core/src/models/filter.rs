//! User-controlled filter state.

use serde::{Deserialize, Serialize};

/// Snapshot of what the user has, wants, and how long they can spend.
///
/// Owned by the presentation layer. The match engine only ever borrows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Materials the user already has
    #[serde(default)]
    pub materials_have: Vec<String>,

    /// Materials the user would like to work with. Read by the engine to
    /// decide between the unscored and scored paths, but it does not change
    /// scores, buckets or ordering.
    #[serde(default)]
    pub materials_want: Vec<String>,

    /// Time budget in minutes; `None` means unbounded
    #[serde(default)]
    pub time_available: Option<u32>,
}

impl FilterState {
    /// Creates an empty filter (no materials, no time limit).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the held materials.
    pub fn with_have<I, M>(mut self, materials: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        self.materials_have = materials.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the wanted materials.
    pub fn with_want<I, M>(mut self, materials: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        self.materials_want = materials.into_iter().map(Into::into).collect();
        self
    }

    /// Sets or clears the time budget.
    pub fn with_time_available(mut self, minutes: Option<u32>) -> Self {
        self.time_available = minutes;
        self
    }

    /// True when either material list is non-empty.
    pub fn has_material_criteria(&self) -> bool {
        !self.materials_have.is_empty() || !self.materials_want.is_empty()
    }

    /// True when a craft of the given duration fits the time budget.
    pub fn allows_duration(&self, minutes: u32) -> bool {
        self.time_available.map_or(true, |limit| minutes <= limit)
    }

    /// Adds the material to the held list, or removes it if already present.
    /// Returns whether the material is held afterwards.
    pub fn toggle_have(&mut self, material: &str) -> bool {
        toggle(&mut self.materials_have, material)
    }

    /// Adds the material to the wanted list, or removes it if already present.
    /// Returns whether the material is wanted afterwards.
    pub fn toggle_want(&mut self, material: &str) -> bool {
        toggle(&mut self.materials_want, material)
    }

    /// Drops all materials and the time budget.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// Material identity is case-insensitive.
fn toggle(materials: &mut Vec<String>, material: &str) -> bool {
    let needle = material.to_lowercase();
    let before = materials.len();
    materials.retain(|m| m.to_lowercase() != needle);
    if materials.len() == before {
        materials.push(material.to_string());
        true
    } else {
        false
    }
}
