use crate::application::candidates::{CandidateList, CandidatePage, CandidateQuery, Pager, derive_page};
use crate::application::dashboard::hr_dashboard;
use crate::application::notifications::NotificationStore;
use crate::application::vacancies::{VacancyQuery, filter_vacancies, summarize};
use crate::domain::{Interview, JobOffer, KpiCard, VacancySummary};
use crate::infra::app_config::PortalConfig;
use chrono::{DateTime, Utc};

/// Everything the portal screens render from.
#[derive(Debug, Clone, Default)]
pub struct PortalState {
    pub candidates: CandidateList,
    pub job_offers: Vec<JobOffer>,
    pub interviews: Vec<Interview>,
    pub query: CandidateQuery,
    pub pager: Pager,
    pub notifications: NotificationStore,
    /// Message for the last rejected action, cleared on the next one.
    pub last_error: Option<String>,
}

impl PortalState {
    pub fn with_config(config: &PortalConfig) -> Self {
        let pager = Pager::new(config.page_size).unwrap_or_else(|err| {
            log::warn!("{}; using default page size", err);
            Pager::default()
        });
        Self {
            query: CandidateQuery {
                sort: config.default_sort,
                direction: config.default_sort.default_direction(),
                ..Default::default()
            },
            pager,
            ..Default::default()
        }
    }

    /// The candidate table page for the current query and pager.
    pub fn page(&self) -> CandidatePage {
        derive_page(&self.candidates, &self.query, &self.pager)
    }

    pub fn vacancy_summaries(&self, query: &VacancyQuery) -> Vec<VacancySummary> {
        filter_vacancies(&self.job_offers, query)
            .into_iter()
            .map(|offer| summarize(offer, &self.candidates))
            .collect()
    }

    pub fn dashboard(&self, now: DateTime<Utc>) -> Vec<KpiCard> {
        hr_dashboard(&self.candidates, &self.job_offers, &self.interviews, now)
    }
}
