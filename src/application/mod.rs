//! Application layer (use-cases, policies).
//!
//! This module derives the views and applies the mutations the portal
//! screens need, without depending on storage or any UI framework.

pub mod candidates;
pub mod dashboard;
pub mod display;
pub mod interviews;
pub mod notifications;
pub mod session;
pub mod vacancies;
