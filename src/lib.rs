//! Film Finder Library
//!
//! Movie search and discussion: a proxy in front of an external movie catalog,
//! paginated result aggregation, movie detail pages and per-movie comments.
//! It backs the server binary (`main.rs`) and the terminal client (`ui/`).
//!
//! ## Architecture Modules
//! - **`search`**: The search proxy endpoint and the `SearchAggregator`, which
//!   accumulates result pages and discards responses overtaken by newer requests.
//! - **`catalog`**: HTTP client for the external catalog (search, details, credits).
//! - **`movies`**: Detail/credits endpoints and the detail view model.
//! - **`comments`**: Comment documents, the store contract, and the authenticated posting path.
//! - **`auth`**: Federated sign-in and the shared `AuthSession`.
//! - **`client`**: Client for this server's own API.
//! - **`server`**, **`config`**, **`error`**: Wiring, configuration and error types.

pub mod auth;
pub mod catalog;
pub mod client;
pub mod comments;
pub mod config;
pub mod error;
pub mod movies;
pub mod search;
pub mod server;

#[cfg(test)]
mod test_support;
