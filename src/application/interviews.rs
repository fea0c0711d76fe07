use crate::domain::{Interview, InterviewStatus, InterviewType};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterviewFilter {
    pub status: Option<InterviewStatus>,
    pub kind: Option<InterviewType>,
}

impl InterviewFilter {
    pub fn matches(&self, interview: &Interview) -> bool {
        self.status.is_none_or(|s| interview.status == s)
            && self.kind.is_none_or(|k| interview.kind == k)
    }
}

/// Matching interviews, earliest first.
pub fn schedule<'a>(interviews: &'a [Interview], filter: &InterviewFilter) -> Vec<&'a Interview> {
    let mut out: Vec<_> = interviews.iter().filter(|i| filter.matches(i)).collect();
    out.sort_by_key(|i| i.scheduled_at);
    out
}

/// Scheduled or proposed interviews at or after `now`, soonest first.
pub fn upcoming(interviews: &[Interview], now: DateTime<Utc>) -> Vec<&Interview> {
    let mut out: Vec<_> = interviews
        .iter()
        .filter(|i| i.status.is_pending() && i.scheduled_at >= now)
        .collect();
    out.sort_by_key(|i| i.scheduled_at);
    out
}
