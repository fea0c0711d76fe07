use super::{DbConn, decode_rows, lock};
use crate::domain::Candidate;
use anyhow::Result;
use std::sync::Arc;

/// Repository for candidate records. Insertion order is kept as list order.
pub struct CandidateRepository {
    conn: DbConn,
}

impl CandidateRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Insert or update one record. New records go to the end of the list.
    pub fn save(&self, candidate: &Candidate) -> Result<()> {
        let conn = lock(&self.conn)?;
        let record_json = serde_json::to_string(candidate)?;
        conn.execute(
            r#"
            INSERT INTO candidates (id, reference, job_ref, position, record_json, updated_at)
            VALUES (?1, ?2, ?3, (SELECT COALESCE(MAX(position) + 1, 0) FROM candidates), ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                reference = excluded.reference,
                job_ref = excluded.job_ref,
                record_json = excluded.record_json,
                updated_at = excluded.updated_at
            "#,
            (
                &candidate.id,
                &candidate.reference,
                &candidate.job_ref,
                &record_json,
                chrono::Utc::now().to_rfc3339(),
            ),
        )?;
        Ok(())
    }

    /// Replace the whole table with `candidates`, in order.
    pub fn replace_all(&self, candidates: &[Arc<Candidate>]) -> Result<()> {
        let mut conn = lock(&self.conn)?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM candidates", [])?;
        let now = chrono::Utc::now().to_rfc3339();
        for (position, candidate) in candidates.iter().enumerate() {
            tx.execute(
                r#"
                INSERT INTO candidates (id, reference, job_ref, position, record_json, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
                (
                    &candidate.id,
                    &candidate.reference,
                    &candidate.job_ref,
                    position as i64,
                    serde_json::to_string(candidate.as_ref())?,
                    &now,
                ),
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    pub fn list_all(&self) -> Result<Vec<Arc<Candidate>>> {
        let conn = lock(&self.conn)?;
        let mut stmt =
            conn.prepare("SELECT id, record_json FROM candidates ORDER BY position ASC")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<(String, String)>, _>>()?;
        Ok(decode_rows::<Candidate>("candidates", rows)
            .into_iter()
            .map(Arc::new)
            .collect())
    }

    pub fn find_by_ref(&self, reference: &str) -> Result<Option<Candidate>> {
        let conn = lock(&self.conn)?;
        let mut stmt =
            conn.prepare("SELECT id, record_json FROM candidates WHERE reference = ?1")?;
        let rows = stmt
            .query_map([reference], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<(String, String)>, _>>()?;
        Ok(decode_rows::<Candidate>("candidates", rows).into_iter().next())
    }

    pub fn count(&self) -> Result<usize> {
        let conn = lock(&self.conn)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM candidates", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn delete(&self, id: &str) -> Result<usize> {
        let conn = lock(&self.conn)?;
        let affected = conn.execute("DELETE FROM candidates WHERE id = ?1", [id])?;
        Ok(affected)
    }
}
