use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a notification
pub type NotificationId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ApplicationStatus,
    Interview,
    #[default]
    General,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 3] = [
        NotificationKind::ApplicationStatus,
        NotificationKind::Interview,
        NotificationKind::General,
    ];
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApplicationStatus => write!(f, "application_status"),
            Self::Interview => write!(f, "interview"),
            Self::General => write!(f, "general"),
        }
    }
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "application_status" | "application" => Ok(Self::ApplicationStatus),
            "interview" => Ok(Self::Interview),
            "general" => Ok(Self::General),
            _ => Err(format!("invalid notification type: {s}")),
        }
    }
}

/// Notification payload before the store assigns an id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub action_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub action_url: Option<String>,
}
