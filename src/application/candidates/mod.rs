//! Candidate list derivation and status mutation.

pub mod listing;
pub mod mutation;

pub use listing::{
    CandidateList, CandidatePage, CandidateQuery, JobFilter, Pager, SortDirection, SortKey,
    derive_page, filter_and_sort,
};
pub use mutation::{advance_stage, group_by_stage, set_decision, set_hr_action, set_stage};

#[cfg(test)]
mod tests;
