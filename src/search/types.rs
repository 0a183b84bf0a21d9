use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::movies::view::{poster_url, PosterSize};

/// A single search hit (one movie).
///
/// Only the fields the display layer needs are typed; everything else the
/// catalog sends is kept in `extra` so the record round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Thumbnail poster used in result lists.
    pub fn poster_url(&self) -> Option<String> {
        poster_url(self.poster_path.as_deref(), PosterSize::Thumbnail)
    }
}

/// One fetch worth of items plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    #[serde(default)]
    pub results: Vec<Item>,
    pub page: u32,
    pub total_pages: u32,
}
