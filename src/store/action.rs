use crate::application::candidates::{JobFilter, SortKey};
use crate::domain::{Decision, HrAction, NewNotification, NotificationId, Stage, User};

#[derive(Debug)]
pub enum Action {
    Candidates(CandidateAction),
    Notifications(NotificationAction),
    Session(SessionAction),
}

#[derive(Debug)]
pub enum CandidateAction {
    SetSearch(String),
    SetJobFilter(JobFilter),
    /// Selecting the active key again flips the direction.
    SelectSort(SortKey),
    GoToPage(u32),
    SetHrAction {
        reference: String,
        action: HrAction,
    },
    SetDecision {
        reference: String,
        decision: Decision,
        reason: Option<String>,
    },
    SetStage {
        candidate_id: String,
        stage: Stage,
    },
    AdvanceStage {
        candidate_id: String,
    },
}

#[derive(Debug)]
pub enum NotificationAction {
    Push(NewNotification),
    MarkRead(NotificationId),
    MarkAllRead,
    Clear(NotificationId),
}

#[derive(Debug)]
pub enum SessionAction {
    Login(User),
    Logout,
}
