//! Domain error types for the manpower portal.
//!
//! These errors represent domain-level failures that can occur during
//! recruitment operations. Infrastructure code keeps returning
//! `anyhow::Result` and is wrapped at the boundary.

use thiserror::Error;

/// Domain errors related to candidate records.
#[derive(Debug, Error)]
pub enum CandidateError {
    #[error("Candidate not found: {0}")]
    NotFound(String),

    #[error("Candidate operation failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}

/// Domain errors related to list derivation and paging.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("Page {requested} is out of range (1..={total_pages})")]
    PageOutOfRange { requested: u32, total_pages: u32 },

    #[error("Page size must be at least 1")]
    InvalidPageSize,
}

/// Domain errors related to notifications.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotificationError {
    #[error("Notification not found: {0}")]
    NotFound(String),
}

/// Errors raised by a key-value persistence capability.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Stored value for {key} is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("Storage operation failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}

/// Domain errors related to the signed-in session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No user is signed in")]
    NotSignedIn,

    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Unified domain error type for application-level error handling.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Candidate error: {0}")]
    Candidate(#[from] CandidateError),

    #[error("Listing error: {0}")]
    Listing(#[from] ListingError),

    #[error("Notification error: {0}")]
    Notification(#[from] NotificationError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Unknown domain error: {0}")]
    Unknown(String),
}

impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::Unknown(s)
    }
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::Unknown(s.to_string())
    }
}
