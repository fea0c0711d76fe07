pub mod candidates;
pub mod notifications;

use super::action::{Action, SessionAction};
use super::command::Command;
use crate::state::PortalState;

pub fn reduce(state: &mut PortalState, action: Action) -> Vec<Command> {
    state.last_error = None;
    match action {
        Action::Candidates(action) => candidates::reduce(state, action),
        Action::Notifications(action) => notifications::reduce(state, action),
        Action::Session(SessionAction::Login(user)) => vec![Command::SignIn(user)],
        Action::Session(SessionAction::Logout) => vec![Command::SignOut],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::candidates::{JobFilter, Pager, SortDirection, SortKey};
    use crate::domain::{
        Candidate, Decision, HrAction, NewNotification, NotificationKind, Role, Stage, User,
    };
    use crate::store::action::{CandidateAction, NotificationAction};
    use std::sync::Arc;

    fn state_with(count: usize) -> PortalState {
        PortalState {
            candidates: (0..count)
                .map(|i| {
                    Arc::new(Candidate {
                        id: format!("{i}"),
                        reference: format!("CAND-{i:03}"),
                        name: format!("Candidate {i}"),
                        position: (if i % 2 == 0 { "Analyst" } else { "Officer" }).into(),
                        job_ref: (if i % 3 == 0 { "JOB-A" } else { "JOB-B" }).into(),
                        matching_score: (i * 7 % 100) as u8,
                        age: 20 + i as u32,
                        ..Default::default()
                    })
                })
                .collect(),
            pager: Pager::new(5).unwrap(),
            ..Default::default()
        }
    }

    fn candidates(action: CandidateAction) -> Action {
        Action::Candidates(action)
    }

    #[test]
    fn query_changes_reset_the_page() {
        let mut state = state_with(12);
        reduce(&mut state, candidates(CandidateAction::GoToPage(3)));
        assert_eq!(state.pager.current_page(), 3);

        reduce(
            &mut state,
            candidates(CandidateAction::SetSearch("officer".into())),
        );
        assert_eq!(state.pager.current_page(), 1);
        assert_eq!(state.page().total_count, 6);

        reduce(&mut state, candidates(CandidateAction::GoToPage(2)));
        reduce(
            &mut state,
            candidates(CandidateAction::SetJobFilter(JobFilter::Ref("JOB-A".into()))),
        );
        assert_eq!(state.pager.current_page(), 1);
        assert!(state.page().rows.iter().all(|c| c.job_ref == "JOB-A"));
    }

    #[test]
    fn out_of_range_page_is_rejected_and_reported() {
        let mut state = state_with(12);
        reduce(&mut state, candidates(CandidateAction::GoToPage(3)));
        reduce(&mut state, candidates(CandidateAction::GoToPage(4)));
        assert_eq!(state.pager.current_page(), 3);
        assert_eq!(
            state.last_error.as_deref(),
            Some("Page 4 is out of range (1..=3)")
        );

        reduce(&mut state, candidates(CandidateAction::GoToPage(2)));
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn selecting_the_same_sort_toggles_direction() {
        let mut state = state_with(3);
        assert_eq!(state.query.sort, SortKey::Score);
        assert_eq!(state.query.direction, SortDirection::Desc);

        reduce(&mut state, candidates(CandidateAction::SelectSort(SortKey::Score)));
        assert_eq!(state.query.direction, SortDirection::Asc);

        reduce(&mut state, candidates(CandidateAction::SelectSort(SortKey::Name)));
        assert_eq!(state.query.sort, SortKey::Name);
        assert_eq!(state.query.direction, SortDirection::Asc);
    }

    #[test]
    fn mutations_emit_persist_for_the_changed_record_only() {
        let mut state = state_with(3);
        let before = state.candidates.clone();

        let commands = reduce(
            &mut state,
            candidates(CandidateAction::SetHrAction {
                reference: "CAND-001".into(),
                action: HrAction::Shortlist,
            }),
        );
        assert!(matches!(
            commands.as_slice(),
            [Command::PersistCandidate(c)] if c.reference == "CAND-001"
        ));
        assert!(Arc::ptr_eq(&before[0], &state.candidates[0]));
        assert_eq!(state.candidates[1].hr_action, HrAction::Shortlist);

        let commands = reduce(
            &mut state,
            candidates(CandidateAction::SetDecision {
                reference: "CAND-002".into(),
                decision: Decision::Hired,
                reason: Some("Strong final interview".into()),
            }),
        );
        assert_eq!(commands.len(), 1);
        assert_eq!(
            state.candidates[2].decision_reason.as_deref(),
            Some("Strong final interview")
        );

        reduce(
            &mut state,
            candidates(CandidateAction::SetStage {
                candidate_id: "0".into(),
                stage: Stage::Hired,
            }),
        );
        reduce(
            &mut state,
            candidates(CandidateAction::AdvanceStage {
                candidate_id: "0".into(),
            }),
        );
        assert_eq!(state.candidates[0].stage, Stage::Hired);
    }

    #[test]
    fn unknown_reference_sets_error_without_commands() {
        let mut state = state_with(2);
        let commands = reduce(
            &mut state,
            candidates(CandidateAction::SetHrAction {
                reference: "CAND-404".into(),
                action: HrAction::Reject,
            }),
        );
        assert!(commands.is_empty());
        assert_eq!(
            state.last_error.as_deref(),
            Some("Candidate not found: CAND-404")
        );
    }

    #[test]
    fn notification_actions() {
        let mut state = PortalState::default();
        reduce(
            &mut state,
            Action::Notifications(NotificationAction::Push(NewNotification {
                kind: NotificationKind::General,
                title: "Hello".into(),
                message: "World".into(),
                action_url: None,
            })),
        );
        let id = state.notifications.items()[0].id.clone();
        reduce(
            &mut state,
            Action::Notifications(NotificationAction::MarkRead(id.clone())),
        );
        assert_eq!(state.notifications.unread_count(), 0);

        reduce(
            &mut state,
            Action::Notifications(NotificationAction::Clear(id.clone())),
        );
        assert!(state.notifications.items().is_empty());

        reduce(&mut state, Action::Notifications(NotificationAction::Clear(id)));
        assert!(state.last_error.is_some());
    }

    #[test]
    fn session_actions_become_commands() {
        let mut state = PortalState::default();
        let user = User {
            name: "Committee Member".into(),
            email: "committee@icesco.org".into(),
            role: Role::Committee,
        };
        let commands = reduce(&mut state, Action::Session(SessionAction::Login(user.clone())));
        assert_eq!(commands, vec![Command::SignIn(user)]);
        let commands = reduce(&mut state, Action::Session(SessionAction::Logout));
        assert_eq!(commands, vec![Command::SignOut]);
    }
}
