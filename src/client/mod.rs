//! API Client Module
//!
//! Consumer side of this server's HTTP API, used by the terminal client.
//!
//! `ApiClient` plays two roles: it is the `SearchSource` behind a
//! `SearchAggregator` and the remote `CommentStore` behind a `CommentBoard`.
//! `MoviePage` bundles what a detail page shows.

pub mod api;
pub mod page;
