//! Craft matching and ranking.
//!
//! [`rank`] turns a catalog and a [`FilterState`] into three buckets:
//!
//! - **perfect**: every material is held, quickest first
//! - **partial**: one or two materials missing, best score first then quickest
//! - **other**: everything else, best score first then quickest
//!
//! Crafts longer than the time budget are dropped. When the filter names no
//! materials at all, nothing is scored: every craft within the time budget
//! lands in `other`, quickest first.
//!
//! A craft with no materials is a perfect match on the scored path (0 of 0
//! held). Wanted materials select the scored path but otherwise have no
//! effect on ranking.

use std::{cmp::Ordering, collections::HashSet};

use log::debug;

use crate::models::{Craft, FilterState, MatchResult, RankedCrafts};

/// Most materials a craft may be missing and still count as a partial match.
pub const PARTIAL_MATCH_MAX_MISSING: usize = 2;

/// Ranks `crafts` against `filter`.
///
/// # Examples
///
/// ```rust
/// use dabble_core::{matcher::rank, Catalog, FilterState};
///
/// let catalog = Catalog::builtin().unwrap();
/// let filter = FilterState::new().with_have(["Origami Paper"]);
/// let ranked = rank(&catalog, &filter);
/// assert!(ranked.perfect.iter().any(|r| r.craft.name == "Origami Crane"));
/// ```
pub fn rank<'a, I>(crafts: I, filter: &FilterState) -> RankedCrafts<'a>
where
    I: IntoIterator<Item = &'a Craft>,
{
    if !filter.has_material_criteria() {
        return rank_by_time(crafts, filter);
    }

    let held = normalize(&filter.materials_have);
    let mut ranked = RankedCrafts::default();

    for result in crafts
        .into_iter()
        .map(|craft| score(craft, &held))
        .filter(|result| filter.allows_duration(result.craft.time_minutes))
    {
        if result.is_perfect_match {
            ranked.perfect.push(result);
        } else if result.is_partial_match {
            ranked.partial.push(result);
        } else {
            ranked.other.push(result);
        }
    }

    ranked.perfect.sort_by_key(|result| result.craft.time_minutes);
    ranked.partial.sort_by(by_score_then_time);
    ranked.other.sort_by(by_score_then_time);

    debug!(
        "Ranked crafts: {} perfect, {} partial, {} other",
        ranked.perfect.len(),
        ranked.partial.len(),
        ranked.other.len()
    );
    ranked
}

/// Scores one craft against the held materials.
///
/// `held` must already be lowercased; see [`normalize`].
pub fn score<'a>(craft: &'a Craft, held: &HashSet<String>) -> MatchResult<'a> {
    let mut match_score = 0;
    let mut missing_materials = Vec::new();

    for material in craft.normalized_materials() {
        if held.contains(&material) {
            match_score += 1;
        } else {
            missing_materials.push(material);
        }
    }

    let is_perfect_match = missing_materials.is_empty();
    let is_partial_match =
        !is_perfect_match && missing_materials.len() <= PARTIAL_MATCH_MAX_MISSING;

    MatchResult {
        craft,
        match_score,
        missing_materials,
        is_perfect_match,
        is_partial_match,
    }
}

/// Lowercases a list of materials into a lookup set.
pub fn normalize(materials: &[String]) -> HashSet<String> {
    materials.iter().map(|m| m.to_lowercase()).collect()
}

fn rank_by_time<'a, I>(crafts: I, filter: &FilterState) -> RankedCrafts<'a>
where
    I: IntoIterator<Item = &'a Craft>,
{
    let mut other: Vec<MatchResult<'a>> = crafts
        .into_iter()
        .filter(|craft| filter.allows_duration(craft.time_minutes))
        .map(MatchResult::unscored)
        .collect();
    other.sort_by_key(|result| result.craft.time_minutes);

    debug!("No material criteria, listing {} crafts by time", other.len());
    RankedCrafts {
        perfect: Vec::new(),
        partial: Vec::new(),
        other,
    }
}

fn by_score_then_time(a: &MatchResult<'_>, b: &MatchResult<'_>) -> Ordering {
    b.match_score
        .cmp(&a.match_score)
        .then_with(|| a.craft.time_minutes.cmp(&b.craft.time_minutes))
}
