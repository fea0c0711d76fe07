//! Reducer-style state updates + side-effect commands.

mod action;
mod command;
mod reducer;
mod runtime;

pub use action::{Action, CandidateAction, NotificationAction, SessionAction};
pub use command::Command;
pub use reducer::reduce;

use crate::application::notifications::NotificationStore;
use crate::application::session::SessionStore;
use crate::infra::app_config::PortalConfig;
use crate::infra::clock::Clock;
use crate::infra::db::Database;
use crate::infra::kv::{KeyValueStore, MemoryKvStore};
use crate::infra::seed;
use crate::state::PortalState;
use anyhow::Result;
use std::sync::Arc;

/// Portal state plus the capabilities its commands run against.
pub struct Portal {
    pub state: PortalState,
    pub session: SessionStore,
    db: Option<Database>,
}

impl Portal {
    /// Open the on-disk portal, seeding the demo dataset into an empty database.
    pub fn open(config: &PortalConfig) -> Result<Self> {
        let db = Database::open_at(config.database_path())?;
        Self::from_database(db, config)
    }

    pub fn from_database(db: Database, config: &PortalConfig) -> Result<Self> {
        let candidates = db.candidate_repo();
        if candidates.count()? == 0 {
            log::info!("Empty database, loading demo dataset");
            seed_database(&db)?;
        }

        let mut state = PortalState::with_config(config);
        state.candidates = candidates.list_all()?;
        state.job_offers = db.job_offer_repo().list_all()?;
        state.interviews = db.interview_repo().list_all()?;

        let storage: Arc<dyn KeyValueStore> = Arc::new(db.kv_store());
        let session = SessionStore::load(storage)?;
        Ok(Self {
            state,
            session,
            db: Some(db),
        })
    }

    /// Demo portal without persistence.
    pub fn in_memory(config: &PortalConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let mut state = PortalState::with_config(config);
        state.candidates = seed::demo_candidates();
        state.job_offers = seed::demo_job_offers();
        state.interviews = seed::demo_interviews();
        state.notifications = NotificationStore::new(clock);
        let session = SessionStore::load(Arc::new(MemoryKvStore::new()))?;
        Ok(Self {
            state,
            session,
            db: None,
        })
    }

    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            runtime::run(self, command);
        }
    }
}

/// Replace the stored records with the demo dataset.
pub fn seed_database(db: &Database) -> Result<()> {
    db.candidate_repo().replace_all(&seed::demo_candidates())?;
    db.job_offer_repo().replace_all(&seed::demo_job_offers())?;
    db.interview_repo().replace_all(&seed::demo_interviews())?;
    Ok(())
}
