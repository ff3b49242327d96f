use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::KinemaError;

const SCHEMA_V1: &str = include_str!("../../../migrations/001_initial.sql");

/// String-keyed slot storage.
///
/// Every persisted structure serializes into exactly one slot. Components
/// hold no connection themselves; the store is passed in at each call so
/// tests can substitute an in-memory instance.
pub trait SlotStore {
    /// Read a slot. `Ok(None)` when the slot has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, KinemaError>;

    fn set(&self, key: &str, value: &str) -> Result<(), KinemaError>;

    fn remove(&self, key: &str) -> Result<(), KinemaError>;
}

/// SQLite-backed slot store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the store at the given path and run migrations.
    pub fn open(path: &Path) -> Result<Self, KinemaError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory store (for tests).
    pub fn open_memory() -> Result<Self, KinemaError> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }
}

impl SlotStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, KinemaError> {
        self.conn
            .query_row("SELECT value FROM slot WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(Into::into)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KinemaError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO slot (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KinemaError> {
        self.conn
            .execute("DELETE FROM slot WHERE key = ?1", params![key])?;
        Ok(())
    }
}

/// Run schema migrations using `PRAGMA user_version` for version tracking.
fn run_migrations(conn: &Connection) -> Result<(), KinemaError> {
    let version: i32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .unwrap_or(0);

    if version < 1 {
        conn.execute_batch(SCHEMA_V1)?;
        conn.pragma_update(None, "user_version", 1)?;
    }
    Ok(())
}
