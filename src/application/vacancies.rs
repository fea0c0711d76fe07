use crate::domain::{
    ApplicationCounts, Candidate, Decision, HrAction, JobOffer, JobOfferStatus, Stage,
    VacancySummary,
};
use std::sync::Arc;

/// Status selector of the vacancies list: `None` shows every status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VacancyQuery {
    pub search: String,
    pub status: Option<JobOfferStatus>,
}

/// Offers matching the search (title, reference or department) and status,
/// in input order.
pub fn filter_vacancies<'a>(offers: &'a [JobOffer], query: &VacancyQuery) -> Vec<&'a JobOffer> {
    let needle = query.search.to_lowercase();
    offers
        .iter()
        .filter(|o| query.status.is_none_or(|s| o.status == s))
        .filter(|o| {
            needle.is_empty()
                || o.title.to_lowercase().contains(&needle)
                || o.reference.to_lowercase().contains(&needle)
                || o.department.to_lowercase().contains(&needle)
        })
        .collect()
}

impl ApplicationCounts {
    /// Counts for the candidates that applied to `job_ref`.
    ///
    /// Shortlisted follows the HR triage axis; hired and rejected accept
    /// either the decision or the pipeline/triage axis, so a change on any
    /// of them is reflected on the next read.
    pub fn for_job(candidates: &[Arc<Candidate>], job_ref: &str) -> Self {
        candidates
            .iter()
            .filter(|c| c.job_ref == job_ref)
            .fold(ApplicationCounts::default(), |mut acc, c| {
                acc.applications += 1;
                if c.hr_action == HrAction::Shortlist {
                    acc.shortlisted += 1;
                }
                if c.decision == Decision::Hired || c.stage == Stage::Hired {
                    acc.hired += 1;
                } else if c.decision == Decision::Rejected || c.hr_action == HrAction::Reject {
                    acc.rejected += 1;
                }
                acc
            })
    }
}

pub fn summarize(offer: &JobOffer, candidates: &[Arc<Candidate>]) -> VacancySummary {
    VacancySummary {
        counts: ApplicationCounts::for_job(candidates, &offer.reference),
        offer: offer.clone(),
    }
}
