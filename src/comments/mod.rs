//! Comments Module
//!
//! Per-movie discussion threads kept in a document store.
//!
//! ## Overview
//! A comment is a small document stamped with its author and time. The store
//! answers two calls: all comments for a movie (newest first) and append.
//! Authorship comes from the `AuthSession`; without a signed-in user nothing
//! is written.
//!
//! ## Submodules
//! - **`types`**: `Comment` document and request DTOs.
//! - **`store`**: `CommentStore` contract and the in-memory store the server uses.
//! - **`board`**: `CommentBoard`, the authenticated read/post path.
//! - **`handlers`**: `GET`/`POST /api/movies/:id/comments`.

pub mod board;
pub mod handlers;
pub mod store;
pub mod types;
