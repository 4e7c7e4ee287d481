//! SQLite-backed key-value slots.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::KeyValueStore;
use crate::error::{Result, StorageResultExt};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv (key, value) VALUES (?1, ?2) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const DELETE_VALUE_SQL: &str = "DELETE FROM kv WHERE key = ?1";

/// Database connection holding the `kv` table.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).while_trying_to("open the database")?;
        Self::with_connection(connection)
    }

    /// Opens a private in-memory database, mostly useful for tests.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().while_trying_to("open an in-memory database")?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self> {
        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .while_trying_to("create the kv table")
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .while_trying_to("read a slot")
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value])
            .while_trying_to("write a slot")?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.connection
            .execute(DELETE_VALUE_SQL, params![key])
            .while_trying_to("delete a slot")?;
        Ok(())
    }
}
