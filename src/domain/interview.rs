use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterviewStatus {
    #[default]
    Scheduled,
    Proposed,
    Completed,
    #[serde(alias = "Rescheduled")]
    Cancelled,
}

impl InterviewStatus {
    pub const ALL: [InterviewStatus; 4] = [
        InterviewStatus::Scheduled,
        InterviewStatus::Proposed,
        InterviewStatus::Completed,
        InterviewStatus::Cancelled,
    ];

    /// Still expected to take place.
    pub fn is_pending(self) -> bool {
        matches!(self, InterviewStatus::Scheduled | InterviewStatus::Proposed)
    }
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scheduled => write!(f, "Scheduled"),
            Self::Proposed => write!(f, "Proposed"),
            Self::Completed => write!(f, "Completed"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl FromStr for InterviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "proposed" => Ok(Self::Proposed),
            "completed" | "done" => Ok(Self::Completed),
            "cancelled" | "canceled" | "rescheduled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid interview status: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterviewType {
    #[default]
    Technical,
    #[serde(rename = "HR")]
    Hr,
    Final,
    Committee,
}

impl InterviewType {
    pub const ALL: [InterviewType; 4] = [
        InterviewType::Technical,
        InterviewType::Hr,
        InterviewType::Final,
        InterviewType::Committee,
    ];
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Technical => write!(f, "Technical"),
            Self::Hr => write!(f, "HR"),
            Self::Final => write!(f, "Final"),
            Self::Committee => write!(f, "Committee"),
        }
    }
}

impl FromStr for InterviewType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "technical" => Ok(Self::Technical),
            "hr" => Ok(Self::Hr),
            "final" => Ok(Self::Final),
            "committee" => Ok(Self::Committee),
            _ => Err(format!("invalid interview type: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: String,
    pub candidate_ref: String,
    pub candidate_name: String,
    pub interviewer: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: InterviewStatus,
    #[serde(rename = "type")]
    pub kind: InterviewType,
}
