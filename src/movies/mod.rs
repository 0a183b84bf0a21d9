//! Movie Detail Module
//!
//! Everything behind a movie's detail page.
//!
//! ## Submodules
//! - **`types`**: `MovieDetails` and `Credits` as the catalog returns them.
//! - **`view`**: `MovieView`, the display strings with their fallbacks, and poster URLs.
//! - **`handlers`**: `GET /api/movies/:id` and `GET /api/movies/:id/credits`.

pub mod handlers;
pub mod types;
pub mod view;
