use super::{DbConn, lock};
use crate::domain::StorageError;
use crate::infra::kv::KeyValueStore;
use rusqlite::OptionalExtension;

/// `KeyValueStore` backed by the `kv_store` table.
pub struct SqliteKvStore {
    conn: DbConn,
}

impl SqliteKvStore {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = lock(&self.conn)?;
        let value = conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(anyhow::Error::from)?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = lock(&self.conn)?;
        conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
            (key, value, chrono::Utc::now().to_rfc3339()),
        )
        .map_err(anyhow::Error::from)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let conn = lock(&self.conn)?;
        conn.execute("DELETE FROM kv_store WHERE key = ?1", [key])
            .map_err(anyhow::Error::from)?;
        Ok(())
    }
}
