//! Paginated Search Aggregator
//!
//! Accumulates result pages for the current query. A new query replaces the
//! list; `load_more` appends the next page in the order the source returned it
//! (duplicates across pages are kept).
//!
//! Overlapping calls are allowed. Each request takes a sequence number when it
//! starts and its response is applied only if no newer request was started in
//! the meantime, so a slow old response can never overwrite newer results.
//!
//! Fetch failures leave the list and cursor untouched. They are logged and
//! reported through [`SearchOutcome::Failed`], never as display state.

use super::types::{Item, ResultPage};
use crate::error::FilmError;

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

/// Anything that can fetch one page of ranked results.
pub trait SearchSource: Send + Sync {
    fn fetch_page(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<ResultPage, FilmError>> + Send;
}

/// Last applied page for the current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    pub current_page: u32,
    pub total_pages: u32,
}

impl PaginationCursor {
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// What happened to a `start_search` / `load_more` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The response was applied to the result list.
    Applied,
    /// Empty query, or nothing more to load. No request was issued.
    Ignored,
    /// A newer request was started before this one resolved; response dropped.
    Stale,
    /// The fetch failed; state unchanged.
    Failed,
}

/// The state a display layer renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSnapshot {
    pub results: Vec<Item>,
    pub has_more: bool,
    /// Query the displayed results belong to.
    pub query_echo: String,
    /// Whether any search has been applied yet.
    pub performed: bool,
}

#[derive(Debug, Default)]
struct AggregateState {
    query: Option<String>,
    results: Vec<Item>,
    cursor: Option<PaginationCursor>,
}

#[derive(Debug, Clone, Copy)]
enum Merge {
    Replace,
    Append,
}

pub struct SearchAggregator<S> {
    source: S,
    state: Mutex<AggregateState>,
    latest_request: AtomicU64,
}

impl<S: SearchSource> SearchAggregator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(AggregateState::default()),
            latest_request: AtomicU64::new(0),
        }
    }

    pub(crate) fn source(&self) -> &S {
        &self.source
    }

    /// Starts a fresh search. Whitespace-only queries are ignored.
    pub async fn start_search(&self, query: &str) -> SearchOutcome {
        if query.trim().is_empty() {
            tracing::debug!("Ignoring empty search query");
            return SearchOutcome::Ignored;
        }

        let seq = self.begin_request();
        let result = self.source.fetch_page(query, 1).await;

        self.complete(seq, query, 1, result, Merge::Replace).await
    }

    /// Fetches the page after the last applied one for the displayed query.
    pub async fn load_more(&self) -> SearchOutcome {
        // Sequence number taken under the lock: any search started after the
        // cursor was read supersedes this page.
        let (seq, query, next_page) = {
            let state = self.state.lock().await;
            match (&state.query, state.cursor) {
                (Some(query), Some(cursor)) if cursor.has_more() => {
                    (self.begin_request(), query.clone(), cursor.current_page + 1)
                }
                _ => {
                    tracing::debug!("No further pages to load");
                    return SearchOutcome::Ignored;
                }
            }
        };

        let result = self.source.fetch_page(&query, next_page).await;

        self.complete(seq, &query, next_page, result, Merge::Append)
            .await
    }

    pub async fn snapshot(&self) -> SearchSnapshot {
        let state = self.state.lock().await;

        SearchSnapshot {
            results: state.results.clone(),
            has_more: state.cursor.map(|c| c.has_more()).unwrap_or(false),
            query_echo: state.query.clone().unwrap_or_default(),
            performed: state.query.is_some(),
        }
    }

    pub(crate) async fn cursor(&self) -> Option<PaginationCursor> {
        self.state.lock().await.cursor
    }

    fn begin_request(&self) -> u64 {
        self.latest_request.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn complete(
        &self,
        seq: u64,
        query: &str,
        requested_page: u32,
        result: Result<ResultPage, FilmError>,
        merge: Merge,
    ) -> SearchOutcome {
        let page = match result {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(
                    "Search for {:?} page {} failed: {}",
                    query,
                    requested_page,
                    e
                );
                return SearchOutcome::Failed;
            }
        };

        let mut state = self.state.lock().await;

        // Checked under the lock so no newer response can slip in between.
        if seq != self.latest_request.load(Ordering::SeqCst) {
            tracing::debug!(
                "Discarding stale response #{} for {:?} page {}",
                seq,
                query,
                requested_page
            );
            return SearchOutcome::Stale;
        }

        if matches!(merge, Merge::Append) && state.query.as_deref() != Some(query) {
            tracing::debug!(
                "Discarding page {} of superseded query {:?}",
                requested_page,
                query
            );
            return SearchOutcome::Stale;
        }

        match merge {
            Merge::Replace => {
                state.results = page.results;
                state.query = Some(query.to_string());
            }
            Merge::Append => state.results.extend(page.results),
        }
        state.cursor = Some(PaginationCursor {
            current_page: requested_page,
            total_pages: page.total_pages,
        });

        tracing::debug!(
            "Applied {:?} page {}/{} ({} results total)",
            query,
            requested_page,
            page.total_pages,
            state.results.len()
        );

        SearchOutcome::Applied
    }
}
