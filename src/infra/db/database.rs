//! SQLite database setup and connection management for the portal
//! Handles database initialization, schema creation, and connection management.

use anyhow::Result;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

const SCHEMA_VERSION: i32 = 1;

/// Database wrapper that manages SQLite connections
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Create an in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init()?;
        Ok(db)
    }

    /// Create or open the database at a specific path
    pub fn open_at(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        log::debug!("opening database at {}", path.display());
        let conn = Connection::open(&path)?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init(&self) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| anyhow::anyhow!("database connection poisoned"))?;

        let existing_version: i32 =
            conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

        if existing_version == 0 {
            Self::create_schema(&conn)?;
            conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        } else if existing_version > SCHEMA_VERSION {
            return Err(anyhow::anyhow!(
                "Database schema version {} is newer than supported version {}",
                existing_version,
                SCHEMA_VERSION
            ));
        }

        Ok(())
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }

    pub fn candidate_repo(&self) -> crate::infra::db::repository::CandidateRepository {
        crate::infra::db::repository::CandidateRepository::new(self.connection())
    }

    pub fn job_offer_repo(&self) -> crate::infra::db::repository::JobOfferRepository {
        crate::infra::db::repository::JobOfferRepository::new(self.connection())
    }

    pub fn interview_repo(&self) -> crate::infra::db::repository::InterviewRepository {
        crate::infra::db::repository::InterviewRepository::new(self.connection())
    }

    pub fn kv_store(&self) -> crate::infra::db::repository::SqliteKvStore {
        crate::infra::db::repository::SqliteKvStore::new(self.connection())
    }

    fn create_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS candidates (
                id TEXT PRIMARY KEY,
                reference TEXT NOT NULL UNIQUE,
                job_ref TEXT NOT NULL,
                position INTEGER NOT NULL,
                record_json TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS job_offers (
                reference TEXT PRIMARY KEY,
                status TEXT NOT NULL,
                position INTEGER NOT NULL,
                record_json TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS interviews (
                id TEXT PRIMARY KEY,
                candidate_ref TEXT NOT NULL,
                scheduled_at TEXT NOT NULL,
                record_json TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_candidates_job_ref ON candidates(job_ref);
            CREATE INDEX IF NOT EXISTS idx_interviews_scheduled_at ON interviews(scheduled_at);
            "#,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.connection();
        let guard = conn.lock().unwrap();
        let version: i32 = guard
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_reopen_on_disk_keeps_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("portal.sqlite");
        {
            let _db = Database::open_at(path.clone()).unwrap();
        }
        let db = Database::open_at(path).unwrap();
        let conn = db.connection();
        let guard = conn.lock().unwrap();
        let tables: i64 = guard
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 4);
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portal.sqlite");
        {
            let conn = Connection::open(&path).unwrap();
            conn.pragma_update(None, "user_version", SCHEMA_VERSION + 1)
                .unwrap();
        }
        assert!(Database::open_at(path).is_err());
    }
}
