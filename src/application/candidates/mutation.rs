use super::listing::CandidateList;
use crate::domain::{Candidate, CandidateError, Decision, HrAction, Stage};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Copy-on-write update of every record selected by `matches`.
///
/// Untouched records keep their `Arc`, so callers can compare snapshots by
/// pointer. No transition checks are made: any enum value is accepted.
fn update_where(
    candidates: &[Arc<Candidate>],
    key: &str,
    matches: impl Fn(&Candidate) -> bool,
    update: impl Fn(&mut Candidate),
) -> Result<CandidateList, CandidateError> {
    let mut next = candidates.to_vec();
    let mut hit = false;
    for slot in next.iter_mut().filter(|c| matches(c)) {
        update(Arc::make_mut(slot));
        hit = true;
    }
    if !hit {
        log::warn!("No candidate matches {}", key);
        return Err(CandidateError::NotFound(key.to_string()));
    }
    Ok(next)
}

pub fn set_hr_action(
    candidates: &[Arc<Candidate>],
    reference: &str,
    action: HrAction,
) -> Result<CandidateList, CandidateError> {
    log::info!("Setting hr action of {} to {}", reference, action);
    update_where(
        candidates,
        reference,
        |c| c.reference == reference,
        |c| c.hr_action = action,
    )
}

/// Record the final outcome. The reason replaces any previous one.
pub fn set_decision(
    candidates: &[Arc<Candidate>],
    reference: &str,
    decision: Decision,
    reason: Option<&str>,
) -> Result<CandidateList, CandidateError> {
    log::info!("Setting decision of {} to {}", reference, decision);
    update_where(
        candidates,
        reference,
        |c| c.reference == reference,
        |c| {
            c.decision = decision;
            c.decision_reason = reason.map(str::to_string);
        },
    )
}

pub fn set_stage(
    candidates: &[Arc<Candidate>],
    candidate_id: &str,
    stage: Stage,
) -> Result<CandidateList, CandidateError> {
    log::info!("Moving candidate {} to stage {}", candidate_id, stage);
    update_where(
        candidates,
        candidate_id,
        |c| c.id == candidate_id,
        |c| c.stage = stage,
    )
}

/// The pipeline's "next stage" button. A hired candidate stays hired.
pub fn advance_stage(
    candidates: &[Arc<Candidate>],
    candidate_id: &str,
) -> Result<CandidateList, CandidateError> {
    let current = candidates
        .iter()
        .find(|c| c.id == candidate_id)
        .map(|c| c.stage)
        .ok_or_else(|| CandidateError::NotFound(candidate_id.to_string()))?;
    match current.next() {
        Some(next) => set_stage(candidates, candidate_id, next),
        None => Ok(candidates.to_vec()),
    }
}

/// Pipeline board columns, in stage order. Empty stages are present.
pub fn group_by_stage(candidates: &[Arc<Candidate>]) -> BTreeMap<Stage, CandidateList> {
    let mut columns: BTreeMap<Stage, CandidateList> =
        Stage::ALL.iter().map(|s| (*s, Vec::new())).collect();
    for candidate in candidates {
        columns
            .entry(candidate.stage)
            .or_default()
            .push(Arc::clone(candidate));
    }
    columns
}
