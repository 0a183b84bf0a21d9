//! Movie Catalog Module
//!
//! Thin HTTP client for the external movie catalog API (TMDb).
//!
//! ## Overview
//! The catalog owns search ranking, pagination and movie metadata. This module
//! only builds requests, checks the response status and hands the JSON back
//! untouched, so the proxy endpoints can forward it as-is.
//!
//! ## Submodules
//! - **`client`**: `CatalogClient`, one method per upstream endpoint.

pub mod client;

#[cfg(test)]
mod tests;
