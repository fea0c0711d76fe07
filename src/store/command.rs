use crate::domain::{Candidate, User};
use std::sync::Arc;

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    PersistCandidate(Arc<Candidate>),
    SignIn(User),
    SignOut,
}
