//! SQLite-backed persistence.
//!
//! All app state is stored as JSON documents in a single kv table,
//! one document per domain (profile, hydration log, workout logs, ...).
//! The documents are small and always read whole, so a kv store beats
//! per-domain schemas here.

use std::path::PathBuf;

use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CoreError, DatabaseError};

use super::data_dir;

/// Well-known kv document keys.
pub mod keys {
    pub const PROFILE: &str = "profile";
    pub const REMINDERS: &str = "reminders";
    pub const HYDRATION: &str = "hydration";
    pub const WORKOUT_LOGS: &str = "workout_logs";
    pub const PROGRESS: &str = "progress";
    pub const NUTRITION: &str = "nutrition";
    pub const TIMER_ENGINE: &str = "timer_engine";
    pub const STOPWATCH: &str = "stopwatch";
    pub const SCHEDULED_NOTIFICATIONS: &str = "scheduled_notifications";
}

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/blaze/blaze.db`, creating the
    /// file and schema if needed.
    pub fn open() -> Result<Self, CoreError> {
        let dir = data_dir()?;
        let path = dir.join("blaze.db");
        let conn = Connection::open(&path).map_err(|source| DatabaseError::OpenFailed {
            path: PathBuf::from(&path),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (tests and dry runs).
    pub fn open_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS kv (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );",
            )
            .map_err(DatabaseError::from)
    }

    pub fn kv_get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv WHERE key = ?1")
            .map_err(DatabaseError::from)?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .map_err(DatabaseError::from)?;
        Ok(())
    }

    pub fn kv_delete(&self, key: &str) -> Result<(), DatabaseError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(DatabaseError::from)?;
        Ok(())
    }

    /// Drop every stored document. Used by `profile reset`.
    pub fn clear(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute("DELETE FROM kv", [])
            .map_err(DatabaseError::from)?;
        Ok(())
    }

    /// Load and deserialize one document; `None` when absent.
    pub fn load_doc<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CoreError> {
        match self.kv_get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and store one document.
    pub fn save_doc<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CoreError> {
        let raw = serde_json::to_string(value)?;
        self.kv_set(key, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydration::HydrationLogbook;
    use chrono::NaiveDate;

    #[test]
    fn kv_store_roundtrip() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("missing").unwrap().is_none());
        db.kv_set("greeting", "hello").unwrap();
        assert_eq!(db.kv_get("greeting").unwrap().unwrap(), "hello");
        db.kv_delete("greeting").unwrap();
        assert!(db.kv_get("greeting").unwrap().is_none());
    }

    #[test]
    fn docs_roundtrip_through_json() {
        let db = Database::open_memory().unwrap();
        let mut log = HydrationLogbook::default();
        log.add_entry(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(), 500);
        db.save_doc(keys::HYDRATION, &log).unwrap();

        let loaded: HydrationLogbook = db.load_doc(keys::HYDRATION).unwrap().unwrap();
        assert_eq!(loaded.entries().len(), 1);
    }

    #[test]
    fn clear_drops_all_documents() {
        let db = Database::open_memory().unwrap();
        db.kv_set(keys::PROFILE, "{}").unwrap();
        db.kv_set(keys::NUTRITION, "{}").unwrap();
        db.clear().unwrap();
        assert!(db.kv_get(keys::PROFILE).unwrap().is_none());
        assert!(db.kv_get(keys::NUTRITION).unwrap().is_none());
    }
}
