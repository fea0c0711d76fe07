use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication status of a job offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobOfferStatus {
    #[serde(alias = "published")]
    Active,
    #[default]
    Draft,
    Closed,
    Archived,
}

impl JobOfferStatus {
    pub const ALL: [JobOfferStatus; 4] = [
        JobOfferStatus::Active,
        JobOfferStatus::Draft,
        JobOfferStatus::Closed,
        JobOfferStatus::Archived,
    ];

    pub fn is_open(self) -> bool {
        matches!(self, JobOfferStatus::Active)
    }
}

impl fmt::Display for JobOfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Draft => write!(f, "draft"),
            Self::Closed => write!(f, "closed"),
            Self::Archived => write!(f, "archived"),
        }
    }
}

impl FromStr for JobOfferStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" | "published" => Ok(Self::Active),
            "draft" => Ok(Self::Draft),
            "closed" => Ok(Self::Closed),
            "archived" => Ok(Self::Archived),
            _ => Err(format!("invalid job offer status: {s}")),
        }
    }
}

/// A published (or draft) job offer.
///
/// Application counts are not stored here; they are derived from the
/// candidate list, see `application::vacancies::summarize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOffer {
    #[serde(rename = "ref")]
    pub reference: String,
    pub title: String,
    pub department: String,
    #[serde(default)]
    pub business_unit: Option<String>,
    pub status: JobOfferStatus,
    pub posted_on: NaiveDate,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

/// Aggregate counts for one job offer, computed on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationCounts {
    pub applications: usize,
    pub shortlisted: usize,
    pub hired: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancySummary {
    pub offer: JobOffer,
    pub counts: ApplicationCounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_is_an_alias_of_active() {
        let status: JobOfferStatus = serde_json::from_str("\"published\"").unwrap();
        assert_eq!(status, JobOfferStatus::Active);
        assert_eq!(JobOfferStatus::from_str("Published").unwrap(), JobOfferStatus::Active);
        assert_eq!(status.to_string(), "active");
    }
}
