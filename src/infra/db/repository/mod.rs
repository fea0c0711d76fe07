//! Repository implementations for data access in the portal.
//!
//! Records are stored as their JSON wire form next to the few columns
//! needed for ordering and lookup.

mod candidate;
mod interview;
mod job_offer;
mod kv;

pub use candidate::CandidateRepository;
pub use interview::InterviewRepository;
pub use job_offer::JobOfferRepository;
pub use kv::SqliteKvStore;

use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

pub(super) type DbConn = Arc<Mutex<Connection>>;

pub(super) fn lock(conn: &DbConn) -> anyhow::Result<MutexGuard<'_, Connection>> {
    conn.lock()
        .map_err(|_| anyhow::anyhow!("database connection poisoned"))
}

/// Decode a stored record, logging and skipping rows that no longer parse.
pub(super) fn decode_rows<T: serde::de::DeserializeOwned>(
    table: &str,
    rows: Vec<(String, String)>,
) -> Vec<T> {
    rows.into_iter()
        .filter_map(|(key, json)| match serde_json::from_str::<T>(&json) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("Skipping unreadable {} row {}: {}", table, key, err);
                None
            }
        })
        .collect()
}
