//! Markdown formatting for crafts, results and feedback.
//!
//! Domain types implement [`std::fmt::Display`] directly; collections and
//! operation feedback get small wrapper types. Everything renders as
//! markdown so the CLI can pass it straight to the terminal renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: ranked result sections and the saved list
//! - [`duration`]: minute formatting (`1 hr 30 min`)
//! - [`models`]: `Display` for [`crate::models::Craft`] and
//!   [`crate::models::MatchResult`]
//! - [`status`]: success/failure lines for save and unsave
//!
//! ```rust
//! use dabble_core::display::Minutes;
//!
//! assert_eq!(Minutes(90).to_string(), "1 hr 30 min");
//! ```

pub mod collections;
pub mod duration;
pub mod models;
pub mod status;

pub use collections::SavedCrafts;
pub use duration::Minutes;
pub use status::OperationStatus;
