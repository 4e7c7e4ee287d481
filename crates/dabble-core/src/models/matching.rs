//! Results produced by the match engine.

use serde::Serialize;

use super::Craft;

/// How well one craft fits the current filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult<'a> {
    /// The craft being scored
    pub craft: &'a Craft,

    /// Number of the craft's materials the user holds
    pub match_score: usize,

    /// Materials the user still needs (lowercase)
    pub missing_materials: Vec<String>,

    /// Every material is held
    pub is_perfect_match: bool,

    /// Not perfect, but at most two materials are missing
    pub is_partial_match: bool,
}

impl<'a> MatchResult<'a> {
    /// Wraps a craft without scoring it: score 0, every material listed as
    /// missing and neither flag set.
    pub fn unscored(craft: &'a Craft) -> Self {
        Self {
            craft,
            match_score: 0,
            missing_materials: craft.materials.clone(),
            is_perfect_match: false,
            is_partial_match: false,
        }
    }

    /// Total number of materials the score was computed against.
    pub fn total_materials(&self) -> usize {
        self.match_score + self.missing_materials.len()
    }
}

/// The three ranked buckets returned by [`crate::matcher::rank`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankedCrafts<'a> {
    /// Perfect matches, quickest first
    pub perfect: Vec<MatchResult<'a>>,

    /// Partial matches, best score first then quickest
    pub partial: Vec<MatchResult<'a>>,

    /// Everything else, best score first then quickest
    pub other: Vec<MatchResult<'a>>,
}

impl<'a> RankedCrafts<'a> {
    /// Number of results across all buckets.
    pub fn total(&self) -> usize {
        self.perfect.len() + self.partial.len() + self.other.len()
    }

    /// True when no craft survived filtering.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterates over every result in display order: perfect, partial, other.
    pub fn iter(&self) -> impl Iterator<Item = &MatchResult<'a>> {
        self.perfect
            .iter()
            .chain(self.partial.iter())
            .chain(self.other.iter())
    }
}
