use crate::domain::{Candidate, ListingError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Candidates are shared between snapshots; a mutation replaces only the
/// record it touches.
pub type CandidateList = Vec<Arc<Candidate>>;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Score,
    Name,
    Age,
    /// Unknown keys keep the input order.
    #[serde(other)]
    Unsorted,
}

impl SortKey {
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortKey::Score => SortDirection::Desc,
            SortKey::Name | SortKey::Age | SortKey::Unsorted => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Score => write!(f, "score"),
            Self::Name => write!(f, "name"),
            Self::Age => write!(f, "age"),
            Self::Unsorted => write!(f, "unsorted"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "score" | "matchingscore" | "matching_score" => Ok(Self::Score),
            "name" => Ok(Self::Name),
            "age" => Ok(Self::Age),
            _ => Ok(Self::Unsorted),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Job-reference filter: `all` or an exact reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JobFilter {
    #[default]
    All,
    Ref(String),
}

impl JobFilter {
    pub fn matches(&self, job_ref: &str) -> bool {
        match self {
            JobFilter::All => true,
            JobFilter::Ref(reference) => reference == job_ref,
        }
    }
}

impl FromStr for JobFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(JobFilter::All),
            other => Ok(JobFilter::Ref(other.to_string())),
        }
    }
}

/// Criteria selected in the candidate list toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateQuery {
    pub search: String,
    pub job: JobFilter,
    pub sort: SortKey,
    pub direction: SortDirection,
}

impl Default for CandidateQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            job: JobFilter::All,
            sort: SortKey::Score,
            direction: SortKey::Score.default_direction(),
        }
    }
}

/// Filter by search term and job reference, then stable-sort.
pub fn filter_and_sort(candidates: &[Arc<Candidate>], query: &CandidateQuery) -> CandidateList {
    let needle = query.search.to_lowercase();
    let mut rows: CandidateList = candidates
        .iter()
        .filter(|c| c.matches_search(&needle))
        .filter(|c| query.job.matches(&c.job_ref))
        .cloned()
        .collect();

    let direction = query.direction;
    match query.sort {
        SortKey::Score => rows.sort_by(|a, b| {
            direction.apply(a.matching_score.cmp(&b.matching_score))
        }),
        SortKey::Name => {
            let mut keyed: Vec<_> = rows
                .into_iter()
                .map(|c| (NameKey::new(&c.name), c))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| direction.apply(a.cmp(b)));
            rows = keyed.into_iter().map(|(_, c)| c).collect();
        }
        SortKey::Age => rows.sort_by(|a, b| direction.apply(a.age.cmp(&b.age))),
        SortKey::Unsorted => {}
    }
    rows
}

/// Collation key for names: accents and case are ignored first, then case,
/// then raw code points break the remaining ties.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct NameKey {
    folded: String,
    lower: String,
    raw: String,
}

impl NameKey {
    fn new(name: &str) -> Self {
        let folded = name
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect();
        Self {
            folded,
            lower: name.to_lowercase(),
            raw: name.to_string(),
        }
    }
}

/// 1-based pagination cursor. The current page only moves to pages that
/// exist for the result count it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: u32,
    current_page: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }
}

impl Pager {
    pub fn new(page_size: u32) -> Result<Self, ListingError> {
        if page_size == 0 {
            return Err(ListingError::InvalidPageSize);
        }
        Ok(Self {
            page_size,
            current_page: 1,
        })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// `ceil(total / page_size)`, zero when there is nothing to show.
    pub fn total_pages(&self, total: usize) -> u32 {
        if self.page_size == 0 || total == 0 {
            return 0;
        }
        total.div_ceil(self.page_size as usize) as u32
    }

    /// Move to `page` if `1 <= page <= total_pages`; otherwise stay put.
    pub fn go_to(&mut self, page: u32, total: usize) -> Result<(), ListingError> {
        let total_pages = self.total_pages(total);
        if page < 1 || page > total_pages {
            return Err(ListingError::PageOutOfRange {
                requested: page,
                total_pages,
            });
        }
        self.current_page = page;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Rows `[(page-1)*size, page*size)` clamped to the slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let size = self.page_size as usize;
        let start = (self.current_page.saturating_sub(1) as usize)
            .saturating_mul(size)
            .min(items.len());
        let end = start.saturating_add(size).min(items.len());
        &items[start..end]
    }
}

/// One rendered page of the candidate table.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidatePage {
    pub rows: CandidateList,
    pub page: u32,
    pub page_size: u32,
    pub total_count: usize,
    pub total_pages: u32,
}

impl CandidatePage {
    /// 1-based inclusive range of rows on this page, `None` when empty.
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let first = (self.page as usize - 1) * self.page_size as usize + 1;
        Some((first, first + self.rows.len() - 1))
    }
}

/// Filter, sort and slice in one pass for the current pager position.
pub fn derive_page(
    candidates: &[Arc<Candidate>],
    query: &CandidateQuery,
    pager: &Pager,
) -> CandidatePage {
    let filtered = filter_and_sort(candidates, query);
    let rows = pager.slice(&filtered).to_vec();
    log::debug!(
        "derived candidate page {} ({} of {} rows)",
        pager.current_page(),
        rows.len(),
        filtered.len()
    );
    CandidatePage {
        page: pager.current_page(),
        page_size: pager.page_size(),
        total_count: filtered.len(),
        total_pages: pager.total_pages(filtered.len()),
        rows,
    }
}
