//! Orchestration state of the search page: the current query, its results,
//! and what to tell the user when follow-up requests finish.

use common::{
    search_const::SEARCH_FAILED_MESSAGE,
    search_query::SearchPayload,
    search_result::{SearchResponse, SearchResultItem, SearchResultSet},
};
use dioxus::logger::tracing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageNotification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl PageNotification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, title: title.into(), description: description.into() }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Failure, title: title.into(), description: description.into() }
    }
}

/// A page of the current query to fetch, tagged with the search it extends.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadMoreRequest {
    pub query: SearchPayload,
    pub offset: u64,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchPageState {
    pub current_query: Option<SearchPayload>,
    pub results: Option<SearchResponse>,
    pub is_loading: bool,
    pub is_loading_more: bool,
    /// Bumped by every search. Responses carrying an older value are dropped.
    search_generation: u64,
}

impl SearchPageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the generation the response must be reported with.
    pub fn begin_search(&mut self, payload: SearchPayload) -> u64 {
        self.search_generation += 1;
        self.current_query = Some(payload);
        self.is_loading = true;
        self.is_loading_more = false;
        self.search_generation
    }

    pub fn search_finished(&mut self, generation: u64, result: Result<SearchResponse, String>) {
        if generation != self.search_generation {
            tracing::debug!("dropping results of superseded search #{generation}");
            return;
        }
        self.is_loading = false;
        self.results = Some(match result {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Search failed: {e}");
                SearchResponse::failed(SEARCH_FAILED_MESSAGE)
            }
        });
    }

    /// The current query resumed after the items already loaded.
    pub fn load_more_request(&mut self) -> Option<LoadMoreRequest> {
        if self.is_loading || self.is_loading_more {
            return None;
        }
        let query = self.current_query.as_ref()?;
        let results = self.results.as_ref()?;
        let offset = results.loaded_count();
        self.is_loading_more = true;
        Some(LoadMoreRequest { query: query.clone(), offset, generation: self.search_generation })
    }

    /// Appends to a flat list. Grouped global results cannot be extended.
    pub fn load_more_finished(&mut self, generation: u64, result: Result<Vec<SearchResultItem>, String>) -> Option<PageNotification> {
        if generation != self.search_generation {
            tracing::debug!("dropping page loaded for superseded search #{generation}");
            return None;
        }
        self.is_loading_more = false;
        let more = match result {
            Ok(more) => more,
            Err(e) => return Some(PageNotification::failure("Failed to load more results", e)),
        };
        let Some(response) = self.results.as_mut() else {
            return None;
        };
        match &mut response.results {
            SearchResultSet::Flat(items) => {
                items.extend(more);
                None
            }
            SearchResultSet::Grouped(_) => Some(PageNotification::failure(
                "Failed to load more results",
                "Results of a search across all types cannot be extended.",
            )),
        }
    }

    /// On success the current query is handed back to be run again from scratch.
    pub fn bulk_action_finished(&mut self, result: Result<(), String>) -> (PageNotification, Option<SearchPayload>) {
        match result {
            Ok(()) => (
                PageNotification::success("Bulk action completed successfully", ""),
                self.current_query.clone(),
            ),
            Err(e) => (PageNotification::failure("Bulk action failed", e), None),
        }
    }
}
