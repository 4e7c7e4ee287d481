//! Builder for creating and configuring Session instances.

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::Session;
use crate::{
    catalog::Catalog,
    error::{DabbleError, Result},
    store::{Database, MemoryStore},
};

/// Builder for creating and configuring Session instances.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    database_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
    catalog: Option<Catalog>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/dabble/dabble.db` or `~/.local/share/dabble/dabble.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the catalog from a JSON file instead of the bundled one.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already loaded catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Builds a session whose saved set lives in an SQLite database.
    ///
    /// # Errors
    ///
    /// Returns `DabbleError::Configuration` if both a catalog and a catalog
    /// path were given
    /// Returns `DabbleError::FileSystem` if the database directory cannot be
    /// created or the catalog file cannot be read
    /// Returns `DabbleError::Storage` if database initialization fails
    pub fn build(self) -> Result<Session<Database>> {
        let db_path = match &self.database_path {
            Some(path) => path.clone(),
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| DabbleError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let catalog = self.load_catalog()?;
        let database = Database::new(&db_path)?;
        info!(
            "Opened session with {} crafts, saved crafts in {}",
            catalog.len(),
            db_path.display()
        );
        Ok(Session::new(catalog, database))
    }

    /// Builds a session whose saved set is kept in memory only.
    ///
    /// Any configured database path is ignored.
    pub fn build_in_memory(self) -> Result<Session<MemoryStore>> {
        let catalog = self.load_catalog()?;
        debug!("Opened in-memory session with {} crafts", catalog.len());
        Ok(Session::new(catalog, MemoryStore::new()))
    }

    fn load_catalog(self) -> Result<Catalog> {
        match (self.catalog, self.catalog_path) {
            (Some(_), Some(_)) => Err(DabbleError::Configuration {
                message: "Provide either a catalog or a catalog path, not both".to_string(),
            }),
            (Some(catalog), None) => Ok(catalog),
            (None, Some(path)) => Catalog::from_path(path),
            (None, None) => Catalog::builtin(),
        }
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("dabble")
            .place_data_file("dabble.db")
            .map_err(|e| DabbleError::XdgDirectory(e.to_string()))
    }
}
