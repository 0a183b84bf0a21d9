//! Search Module
//!
//! Movie search: the proxy endpoint in front of the catalog and the client-side
//! aggregator that stitches result pages together.
//!
//! ## Overview
//! Ranking and paging are done by the catalog. What lives here is the
//! bookkeeping around it: a fresh query replaces the displayed list, "load more"
//! appends the next page, and only the most recently started request may touch
//! the list.
//!
//! ## Submodules
//! - **`aggregator`**: `SearchAggregator`, `SearchSource` and the pagination cursor.
//! - **`handlers`**: `GET /api/searchMovies`.
//! - **`types`**: `Item` and `ResultPage` wire types.

pub mod aggregator;
pub mod handlers;
pub mod types;
