//! Core library for the Dabble craft finder.
//!
//! Given the materials someone has and the time they can spare, Dabble ranks
//! a catalog of craft projects into perfect matches, partial matches and
//! other ideas, and remembers the crafts they save.
//!
//! - [`catalog`]: the read-only craft catalog
//! - [`materials`]: the material index used by pickers and search
//! - [`matcher`]: the pure ranking engine
//! - [`store`]: the persisted saved-craft set
//! - [`session`]: explicit per-user context tying the pieces together
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use dabble_core::{matcher::rank, Catalog, FilterState};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let filter = FilterState::new()
//!     .with_have(["yarn", "scissors", "cardboard"])
//!     .with_time_available(Some(60));
//!
//! let ranked = rank(&catalog, &filter);
//! for result in ranked.iter() {
//!     println!("{}", result);
//! }
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod materials;
pub mod matcher;
pub mod models;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use catalog::Catalog;
pub use display::{Minutes, OperationStatus, SavedCrafts};
pub use error::{DabbleError, Result};
pub use materials::{material_index, search_materials};
pub use models::{Craft, Difficulty, FilterState, MatchResult, RankedCrafts};
pub use session::{Session, SessionBuilder};
pub use store::{Database, KeyValueStore, MemoryStore, SavedSet, StoreOutcome};
