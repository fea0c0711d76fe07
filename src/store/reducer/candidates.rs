use super::super::action::CandidateAction;
use super::super::command::Command;
use crate::application::candidates::{
    CandidateList, advance_stage, filter_and_sort, set_decision, set_hr_action, set_stage,
};
use crate::domain::CandidateError;
use crate::state::PortalState;
use std::sync::Arc;

pub fn reduce(state: &mut PortalState, action: CandidateAction) -> Vec<Command> {
    match action {
        CandidateAction::SetSearch(search) => {
            state.query.search = search;
            state.pager.reset();
            Vec::new()
        }
        CandidateAction::SetJobFilter(job) => {
            state.query.job = job;
            state.pager.reset();
            Vec::new()
        }
        CandidateAction::SelectSort(key) => {
            if state.query.sort == key {
                state.query.direction = state.query.direction.toggled();
            } else {
                state.query.sort = key;
                state.query.direction = key.default_direction();
            }
            state.pager.reset();
            Vec::new()
        }
        CandidateAction::GoToPage(page) => {
            let total = filter_and_sort(&state.candidates, &state.query).len();
            if let Err(err) = state.pager.go_to(page, total) {
                log::warn!("{}", err);
                state.last_error = Some(err.to_string());
            }
            Vec::new()
        }
        CandidateAction::SetHrAction { reference, action } => {
            let result = set_hr_action(&state.candidates, &reference, action);
            apply(state, result)
        }
        CandidateAction::SetDecision {
            reference,
            decision,
            reason,
        } => {
            let result = set_decision(&state.candidates, &reference, decision, reason.as_deref());
            apply(state, result)
        }
        CandidateAction::SetStage {
            candidate_id,
            stage,
        } => {
            let result = set_stage(&state.candidates, &candidate_id, stage);
            apply(state, result)
        }
        CandidateAction::AdvanceStage { candidate_id } => {
            let result = advance_stage(&state.candidates, &candidate_id);
            apply(state, result)
        }
    }
}

/// Swap in the new snapshot and persist the records that were replaced.
fn apply(state: &mut PortalState, result: Result<CandidateList, CandidateError>) -> Vec<Command> {
    match result {
        Ok(next) => {
            let commands = next
                .iter()
                .zip(&state.candidates)
                .filter(|(new, old)| !Arc::ptr_eq(new, old))
                .map(|(new, _)| Command::PersistCandidate(Arc::clone(new)))
                .collect();
            state.candidates = next;
            commands
        }
        Err(err) => {
            state.last_error = Some(err.to_string());
            Vec::new()
        }
    }
}
