use super::interviews::upcoming;
use crate::domain::{
    Candidate, Decision, HrAction, Interview, JobOffer, KpiCard, KpiIcon, Stage,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// KPI tiles of the HR dashboard.
pub fn hr_dashboard(
    candidates: &[Arc<Candidate>],
    offers: &[JobOffer],
    interviews: &[Interview],
    now: DateTime<Utc>,
) -> Vec<KpiCard> {
    let active_offers = offers.iter().filter(|o| o.status.is_open()).count();
    let shortlisted = candidates
        .iter()
        .filter(|c| c.hr_action == HrAction::Shortlist)
        .count();
    let hired = candidates
        .iter()
        .filter(|c| c.decision == Decision::Hired || c.stage == Stage::Hired)
        .count();
    let average_score = if candidates.is_empty() {
        0.0
    } else {
        candidates
            .iter()
            .map(|c| f64::from(c.matching_score))
            .sum::<f64>()
            / candidates.len() as f64
    };

    vec![
        KpiCard::new(KpiIcon::Users, "Total Candidates", candidates.len()),
        KpiCard::new(KpiIcon::Briefcase, "Active Vacancies", active_offers),
        KpiCard::new(KpiIcon::CheckCircle, "Shortlisted", shortlisted),
        KpiCard::new(
            KpiIcon::Calendar,
            "Upcoming Interviews",
            upcoming(interviews, now).len(),
        ),
        KpiCard::new(KpiIcon::Award, "Hired", hired),
        KpiCard::new(
            KpiIcon::TrendingUp,
            "Avg. Matching Score",
            format!("{average_score:.0}%"),
        ),
    ]
}
