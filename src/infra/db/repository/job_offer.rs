use super::{DbConn, decode_rows, lock};
use crate::domain::JobOffer;
use anyhow::Result;

/// Repository for job offers.
pub struct JobOfferRepository {
    conn: DbConn,
}

impl JobOfferRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    pub fn replace_all(&self, offers: &[JobOffer]) -> Result<()> {
        let mut conn = lock(&self.conn)?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM job_offers", [])?;
        for (position, offer) in offers.iter().enumerate() {
            tx.execute(
                "INSERT INTO job_offers (reference, status, position, record_json) VALUES (?1, ?2, ?3, ?4)",
                (
                    &offer.reference,
                    offer.status.to_string(),
                    position as i64,
                    serde_json::to_string(offer)?,
                ),
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    pub fn list_all(&self) -> Result<Vec<JobOffer>> {
        let conn = lock(&self.conn)?;
        let mut stmt =
            conn.prepare("SELECT reference, record_json FROM job_offers ORDER BY position ASC")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<(String, String)>, _>>()?;
        Ok(decode_rows("job_offers", rows))
    }
}
