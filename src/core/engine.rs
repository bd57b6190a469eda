use serde::{Deserialize, Serialize};

use crate::core::{
    filters::matches_query,
    pagination::{Pagination, DEFAULT_PAGE_SIZE},
    sorting::sort_profiles,
};
use crate::models::{ProfileQuery, ProfileRecord};

/// One page of query results plus the metadata needed for pager controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage<T = ProfileRecord> {
    pub items: Vec<T>,
    pub total_matches: usize,
    pub total_pages: u32,
    pub current_page: u32,
}

impl<T> QueryPage<T> {
    /// Transform the items while keeping the page metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> QueryPage<U> {
        QueryPage {
            items: self.items.into_iter().map(f).collect(),
            total_matches: self.total_matches,
            total_pages: self.total_pages,
            current_page: self.current_page,
        }
    }
}

/// List query orchestrator
///
/// # Pipeline Stages
/// 1. Filter: AND of every active filter
/// 2. Sort: stable, single key
/// 3. Paginate: fixed page size, 1-indexed
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine {
    page_size: usize,
}

impl QueryEngine {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Run a query over the full collection.
    ///
    /// Pure: the input slice is never reordered and the same inputs always
    /// give the same page. Only the records on the requested page are cloned.
    pub fn query(&self, records: &[ProfileRecord], query: &ProfileQuery) -> QueryPage {
        // Stage 1: filter
        let mut matched: Vec<&ProfileRecord> = records
            .iter()
            .filter(|profile| matches_query(profile, query))
            .collect();

        // Stage 2: sort
        sort_profiles(&mut matched, query.sort);

        // Stage 3: paginate
        let pagination = Pagination::new(matched.len(), query.page, self.page_size);
        let items: Vec<ProfileRecord> = matched[pagination.range()]
            .iter()
            .map(|profile| (*profile).clone())
            .collect();

        tracing::debug!(
            total = records.len(),
            matched = pagination.total_items,
            page = pagination.current_page,
            returned = items.len(),
            "profile query evaluated"
        );

        QueryPage {
            items,
            total_matches: pagination.total_items,
            total_pages: pagination.total_pages,
            current_page: pagination.current_page,
        }
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
