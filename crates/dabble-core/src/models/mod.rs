//! Data models for crafts, filters and match results.
//!
//! - [`Craft`] and [`Difficulty`]: immutable catalog records
//! - [`FilterState`]: what the user holds, wants and how long they have
//! - [`MatchResult`] and [`RankedCrafts`]: derived, per-call engine output
//!
//! Markdown formatting for these types lives in [`crate::display`].

mod craft;
mod filter;
mod matching;


pub use craft::{Craft, Difficulty};
pub use filter::FilterState;
pub use matching::{MatchResult, RankedCrafts};
