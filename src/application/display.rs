//! Status → badge lookup used by every list and card view.
//!
//! One table per status axis. Raw strings that do not parse fall back to the
//! neutral badge.

use crate::domain::{
    Decision, HrAction, InterviewStatus, InterviewType, JobOfferStatus, NotificationKind, Stage,
};
use serde::Serialize;
use std::str::FromStr;

/// Colour family of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Danger,
    Warning,
    Info,
    Accent,
    Neutral,
}

impl Tone {
    /// Tailwind-style classes the portal frontend expects.
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Success => "bg-green-100 text-green-800",
            Tone::Danger => "bg-red-100 text-red-800",
            Tone::Warning => "bg-yellow-100 text-yellow-800",
            Tone::Info => "bg-blue-100 text-blue-800",
            Tone::Accent => "bg-purple-100 text-purple-800",
            Tone::Neutral => "bg-gray-100 text-gray-800",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub tone: Tone,
}

impl Badge {
    pub const NEUTRAL: Badge = Badge {
        label: "Unknown",
        tone: Tone::Neutral,
    };

    const fn new(label: &'static str, tone: Tone) -> Self {
        Self { label, tone }
    }
}

pub trait Badged {
    fn badge(&self) -> Badge;
}

impl Badged for HrAction {
    fn badge(&self) -> Badge {
        match self {
            HrAction::Shortlist => Badge::new("Shortlisted", Tone::Success),
            HrAction::Reject => Badge::new("Rejected", Tone::Danger),
            HrAction::UnderReview => Badge::new("Under Review", Tone::Warning),
            HrAction::NotReviewed => Badge::new("Not Reviewed", Tone::Neutral),
        }
    }
}

impl Badged for Decision {
    fn badge(&self) -> Badge {
        match self {
            Decision::Hired => Badge::new("Hired", Tone::Success),
            Decision::Rejected => Badge::new("Rejected", Tone::Danger),
            Decision::UnderReview => Badge::new("Under Review", Tone::Warning),
        }
    }
}

impl Badged for Stage {
    fn badge(&self) -> Badge {
        match self {
            Stage::New => Badge::new("New", Tone::Info),
            Stage::UnderReview => Badge::new("Under Review", Tone::Warning),
            Stage::Interview => Badge::new("Interview", Tone::Accent),
            Stage::Offer => Badge::new("Offer", Tone::Info),
            Stage::Hired => Badge::new("Hired", Tone::Success),
        }
    }
}

impl Badged for InterviewStatus {
    fn badge(&self) -> Badge {
        match self {
            InterviewStatus::Scheduled => Badge::new("Scheduled", Tone::Info),
            InterviewStatus::Proposed => Badge::new("Proposed", Tone::Warning),
            InterviewStatus::Completed => Badge::new("Completed", Tone::Success),
            InterviewStatus::Cancelled => Badge::new("Cancelled", Tone::Danger),
        }
    }
}

impl Badged for InterviewType {
    fn badge(&self) -> Badge {
        match self {
            InterviewType::Technical => Badge::new("Technical", Tone::Info),
            InterviewType::Hr => Badge::new("HR", Tone::Accent),
            InterviewType::Final => Badge::new("Final", Tone::Success),
            InterviewType::Committee => Badge::new("Committee", Tone::Warning),
        }
    }
}

impl Badged for JobOfferStatus {
    fn badge(&self) -> Badge {
        match self {
            JobOfferStatus::Active => Badge::new("Active", Tone::Success),
            JobOfferStatus::Draft => Badge::new("Draft", Tone::Neutral),
            JobOfferStatus::Closed => Badge::new("Closed", Tone::Danger),
            JobOfferStatus::Archived => Badge::new("Archived", Tone::Neutral),
        }
    }
}

impl Badged for NotificationKind {
    fn badge(&self) -> Badge {
        match self {
            NotificationKind::ApplicationStatus => Badge::new("Application", Tone::Info),
            NotificationKind::Interview => Badge::new("Interview", Tone::Accent),
            NotificationKind::General => Badge::new("General", Tone::Neutral),
        }
    }
}

/// Which table a raw value should be looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAxis {
    HrAction,
    Decision,
    Stage,
    InterviewStatus,
    InterviewType,
    JobOfferStatus,
    NotificationKind,
}

/// Badge for an untyped value, e.g. one read from an older export.
pub fn badge_for(axis: StatusAxis, raw: &str) -> Badge {
    fn lookup<T: FromStr + Badged>(raw: &str) -> Badge {
        T::from_str(raw).map(|v| v.badge()).unwrap_or(Badge::NEUTRAL)
    }
    match axis {
        StatusAxis::HrAction => lookup::<HrAction>(raw),
        StatusAxis::Decision => lookup::<Decision>(raw),
        StatusAxis::Stage => lookup::<Stage>(raw),
        StatusAxis::InterviewStatus => lookup::<InterviewStatus>(raw),
        StatusAxis::InterviewType => lookup::<InterviewType>(raw),
        StatusAxis::JobOfferStatus => lookup::<JobOfferStatus>(raw),
        StatusAxis::NotificationKind => lookup::<NotificationKind>(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_tables() {
        assert_eq!(HrAction::Shortlist.badge().tone, Tone::Success);
        assert_eq!(Decision::Rejected.badge().tone, Tone::Danger);
        assert_eq!(Stage::Interview.badge().label, "Interview");
        assert_eq!(InterviewType::Hr.badge().label, "HR");
        assert_eq!(JobOfferStatus::Archived.badge().tone, Tone::Neutral);
    }

    #[test]
    fn test_raw_lookup_falls_back_to_neutral() {
        assert_eq!(
            badge_for(StatusAxis::HrAction, "under-review"),
            HrAction::UnderReview.badge()
        );
        assert_eq!(
            badge_for(StatusAxis::JobOfferStatus, "published").label,
            "Active"
        );
        assert_eq!(
            badge_for(StatusAxis::NotificationKind, "interview"),
            NotificationKind::Interview.badge()
        );
        assert_eq!(
            badge_for(StatusAxis::NotificationKind, "application_status").label,
            "Application"
        );
        assert_eq!(badge_for(StatusAxis::Stage, "onboarding"), Badge::NEUTRAL);
        assert_eq!(badge_for(StatusAxis::InterviewStatus, ""), Badge::NEUTRAL);
        assert_eq!(Badge::NEUTRAL.tone.css_class(), "bg-gray-100 text-gray-800");
    }
}
