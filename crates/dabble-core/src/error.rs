//! Error types for the dabble library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for every fallible dabble operation.
///
/// Saved-set mutations never produce one of these: persistence failures are
/// recovered inside [`crate::store::SavedSet`] and reported as
/// [`crate::store::StoreOutcome::Failed`].
#[derive(Error, Debug)]
pub enum DabbleError {
    /// The SQLite backend rejected an operation on the saved-crafts database
    #[error("Storage error while trying to {action}")]
    Storage {
        action: &'static str,
        #[source]
        source: rusqlite::Error,
    },
    #[error("Craft with ID {id} not found")]
    CraftNotFound { id: u64 },
    /// A catalog file could not be read, or the data directory not created
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// A catalog record breaks a catalog rule
    #[error("Invalid craft {id}: {reason}")]
    InvalidCraft { id: u64, reason: String },
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Conflicting session settings
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DabbleError {
    pub(crate) fn invalid_craft(id: u64, reason: impl Into<String>) -> Self {
        Self::InvalidCraft {
            id,
            reason: reason.into(),
        }
    }
}

/// Tags a rusqlite failure with what the store was doing at the time.
pub(crate) trait StorageResultExt<T> {
    fn while_trying_to(self, action: &'static str) -> Result<T>;
}

impl<T> StorageResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn while_trying_to(self, action: &'static str) -> Result<T> {
        self.map_err(|source| DabbleError::Storage { action, source })
    }
}

/// Result type alias for dabble operations
pub type Result<T> = std::result::Result<T, DabbleError>;
