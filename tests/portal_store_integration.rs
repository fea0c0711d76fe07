//! Portal dispatch against a real SQLite file: mutations and the session
//! survive a reopen.

use manpower::domain::{HrAction, Role, Stage, User};
use manpower::infra::app_config::PortalConfig;
use manpower::infra::clock::ManualClock;
use manpower::infra::db::Database;
use manpower::store::{
    Action, CandidateAction, NotificationAction, Portal, SessionAction, seed_database,
};
use chrono::{TimeZone, Utc};
use std::sync::Arc;

fn config_in(dir: &tempfile::TempDir) -> PortalConfig {
    PortalConfig {
        data_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    }
}

#[test]
fn test_fresh_database_is_seeded() -> anyhow::Result<()> {
    let portal = Portal::from_database(Database::open_in_memory()?, &PortalConfig::default())?;
    assert_eq!(portal.state.candidates.len(), 12);
    assert_eq!(portal.state.job_offers.len(), 4);
    assert!(!portal.state.interviews.is_empty());
    assert!(portal.session.current().is_none());
    Ok(())
}

#[test]
fn test_mutations_persist_across_reopen() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = config_in(&dir);

    {
        let mut portal = Portal::open(&config)?;
        portal.dispatch(Action::Candidates(CandidateAction::SetHrAction {
            reference: "CAND-005".into(),
            action: HrAction::Shortlist,
        }));
        portal.dispatch(Action::Candidates(CandidateAction::SetStage {
            candidate_id: "5".into(),
            stage: Stage::Interview,
        }));
        assert_eq!(portal.state.last_error, None);
    }

    let portal = Portal::open(&config)?;
    let record = portal
        .state
        .candidates
        .iter()
        .find(|c| c.reference == "CAND-005")
        .unwrap();
    assert_eq!(record.hr_action, HrAction::Shortlist);
    assert_eq!(record.stage, Stage::Interview);
    assert_eq!(portal.state.candidates[4].reference, "CAND-005");
    Ok(())
}

#[test]
fn test_session_survives_reopen_until_logout() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = config_in(&dir);
    let user = User {
        name: "Recruitment Officer".into(),
        email: "recruitment@icesco.org".into(),
        role: Role::Recruitment,
    };

    {
        let mut portal = Portal::open(&config)?;
        portal.dispatch(Action::Session(SessionAction::Login(user.clone())));
    }
    {
        let mut portal = Portal::open(&config)?;
        assert_eq!(portal.session.current(), Some(&user));
        portal.dispatch(Action::Session(SessionAction::Logout));
    }

    let portal = Portal::open(&config)?;
    assert!(portal.session.current().is_none());
    Ok(())
}

#[test]
fn test_rejected_action_leaves_state_alone() -> anyhow::Result<()> {
    let mut portal = Portal::from_database(Database::open_in_memory()?, &PortalConfig::default())?;
    let before = portal.state.candidates.clone();

    portal.dispatch(Action::Candidates(CandidateAction::AdvanceStage {
        candidate_id: "404".into(),
    }));

    assert_eq!(
        portal.state.last_error.as_deref(),
        Some("Candidate not found: 404")
    );
    assert!(
        before
            .iter()
            .zip(portal.state.candidates.iter())
            .all(|(a, b)| Arc::ptr_eq(a, b))
    );
    Ok(())
}

#[test]
fn test_in_memory_portal_notifications() -> anyhow::Result<()> {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap(),
    ));
    let mut portal = Portal::in_memory(&PortalConfig::default(), clock)?;

    for new in manpower::infra::seed::demo_notifications() {
        portal.dispatch(Action::Notifications(NotificationAction::Push(new)));
    }
    assert_eq!(portal.state.notifications.unread_count(), 3);

    portal.dispatch(Action::Notifications(NotificationAction::MarkAllRead));
    assert_eq!(portal.state.notifications.unread_count(), 0);
    assert!(
        portal
            .state
            .notifications
            .items()
            .iter()
            .all(|n| n.timestamp == Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap())
    );
    Ok(())
}

#[test]
fn test_seed_resets_every_table() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    seed_database(&db)?;
    let mut extra = manpower::infra::seed::demo_interviews()[0].clone();
    extra.id = "INT-EXTRA".into();
    db.interview_repo().save(&extra)?;

    seed_database(&db)?;
    let interviews = db.interview_repo().list_all()?;
    assert_eq!(interviews.len(), manpower::infra::seed::demo_interviews().len());
    assert!(interviews.iter().all(|i| i.id != "INT-EXTRA"));
    Ok(())
}
