use super::{DbConn, decode_rows, lock};
use crate::domain::Interview;
use anyhow::Result;

/// Repository for interview slots.
pub struct InterviewRepository {
    conn: DbConn,
}

impl InterviewRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    pub fn save(&self, interview: &Interview) -> Result<()> {
        let conn = lock(&self.conn)?;
        conn.execute(
            r#"
            INSERT OR REPLACE INTO interviews (id, candidate_ref, scheduled_at, record_json)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            (
                &interview.id,
                &interview.candidate_ref,
                interview.scheduled_at.to_rfc3339(),
                serde_json::to_string(interview)?,
            ),
        )?;
        Ok(())
    }

    pub fn replace_all(&self, interviews: &[Interview]) -> Result<()> {
        let mut conn = lock(&self.conn)?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM interviews", [])?;
        for interview in interviews {
            tx.execute(
                "INSERT INTO interviews (id, candidate_ref, scheduled_at, record_json) VALUES (?1, ?2, ?3, ?4)",
                (
                    &interview.id,
                    &interview.candidate_ref,
                    interview.scheduled_at.to_rfc3339(),
                    serde_json::to_string(interview)?,
                ),
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// All interviews, earliest first.
    pub fn list_all(&self) -> Result<Vec<Interview>> {
        let conn = lock(&self.conn)?;
        let mut stmt =
            conn.prepare("SELECT id, record_json FROM interviews ORDER BY scheduled_at ASC")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<(String, String)>, _>>()?;
        Ok(decode_rows("interviews", rows))
    }
}
