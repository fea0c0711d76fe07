use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a candidate record
pub type CandidateId = String;

/// Recruiter triage decision on a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HrAction {
    Shortlist,
    Reject,
    UnderReview,
    #[default]
    NotReviewed,
}

impl HrAction {
    pub const ALL: [HrAction; 4] = [
        HrAction::Shortlist,
        HrAction::Reject,
        HrAction::UnderReview,
        HrAction::NotReviewed,
    ];
}

impl fmt::Display for HrAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shortlist => write!(f, "shortlist"),
            Self::Reject => write!(f, "reject"),
            Self::UnderReview => write!(f, "under-review"),
            Self::NotReviewed => write!(f, "not-reviewed"),
        }
    }
}

impl FromStr for HrAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "shortlist" | "shortlisted" => Ok(Self::Shortlist),
            "reject" | "rejected" => Ok(Self::Reject),
            "under_review" => Ok(Self::UnderReview),
            "not_reviewed" => Ok(Self::NotReviewed),
            _ => Err(format!("invalid hr action: {s}")),
        }
    }
}

/// Final outcome of a candidate's process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Hired,
    Rejected,
    #[default]
    UnderReview,
}

impl Decision {
    pub const ALL: [Decision; 3] = [Decision::Hired, Decision::Rejected, Decision::UnderReview];
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hired => write!(f, "hired"),
            Self::Rejected => write!(f, "rejected"),
            Self::UnderReview => write!(f, "under_review"),
        }
    }
}

impl FromStr for Decision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "hired" | "hire" => Ok(Self::Hired),
            "rejected" | "reject" => Ok(Self::Rejected),
            "under_review" => Ok(Self::UnderReview),
            _ => Err(format!("invalid decision: {s}")),
        }
    }
}

/// Position of a candidate in the recruitment pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    New,
    UnderReview,
    Interview,
    Offer,
    Hired,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::New,
        Stage::UnderReview,
        Stage::Interview,
        Stage::Offer,
        Stage::Hired,
    ];

    /// The stage the "next stage" button moves to. `None` once hired.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::New => Some(Stage::UnderReview),
            Stage::UnderReview => Some(Stage::Interview),
            Stage::Interview => Some(Stage::Offer),
            Stage::Offer => Some(Stage::Hired),
            Stage::Hired => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::UnderReview => write!(f, "under_review"),
            Self::Interview => write!(f, "interview"),
            Self::Offer => write!(f, "offer"),
            Self::Hired => write!(f, "hired"),
        }
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "new" => Ok(Self::New),
            "under_review" | "review" => Ok(Self::UnderReview),
            "interview" => Ok(Self::Interview),
            "offer" => Ok(Self::Offer),
            "hired" => Ok(Self::Hired),
            _ => Err(format!("invalid stage: {s}")),
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', ' '], "_")
}

/// A candidate record as exchanged with the portal frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    /// Reference key used by the HR action and decision views.
    #[serde(rename = "ref")]
    pub reference: String,
    pub name: String,
    pub position: String,
    /// Reference of the job offer this application targets.
    pub job_ref: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
    pub age: u32,
    /// Matching score against the job offer, 0-100.
    pub matching_score: u8,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub hr_action: HrAction,
    #[serde(default)]
    pub decision: Decision,
    #[serde(default)]
    pub decision_reason: Option<String>,
    #[serde(default)]
    pub stage: Stage,
}

impl Candidate {
    /// Case-insensitive substring match on name or position.
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(needle_lower)
            || self.position.to_lowercase().contains(needle_lower)
    }
}
