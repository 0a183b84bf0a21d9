use super::types::{Credits, MovieDetails};

pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const POSTER_PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/500x750?text=No+Poster+Available";
pub const CAST_PREVIEW_LEN: usize = 5;

pub const NO_RELEASE_DATE: &str = "Release date not available";
pub const NO_RATING: &str = "Rating not available";
pub const NO_RUNTIME: &str = "Runtime not available";
pub const NO_CAST: &str = "Cast not available";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSize {
    /// Result list cards.
    Thumbnail,
    /// Detail page.
    Detail,
}

impl PosterSize {
    fn as_str(self) -> &'static str {
        match self {
            PosterSize::Thumbnail => "w200",
            PosterSize::Detail => "w500",
        }
    }
}

pub fn poster_url(poster_path: Option<&str>, size: PosterSize) -> Option<String> {
    poster_path
        .filter(|path| !path.is_empty())
        .map(|path| format!("{}/{}{}", IMAGE_BASE_URL, size.as_str(), path))
}

/// Display-ready strings for the detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieView {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub poster_url: String,
    pub release_date: String,
    pub rating: String,
    pub runtime: String,
    pub cast: String,
}

impl MovieView {
    pub fn new(details: &MovieDetails, credits: Option<&Credits>) -> Self {
        let release_date = details
            .release_date
            .as_deref()
            .filter(|date| !date.is_empty())
            .unwrap_or(NO_RELEASE_DATE)
            .to_string();

        let rating = details
            .vote_average
            .map(|vote| format!("{}/10", vote))
            .unwrap_or_else(|| NO_RATING.to_string());

        let runtime = details
            .runtime
            .filter(|minutes| *minutes > 0)
            .map(|minutes| format!("{} minutes", minutes))
            .unwrap_or_else(|| NO_RUNTIME.to_string());

        Self {
            id: details.id,
            title: details.title.clone(),
            overview: details.overview.clone().unwrap_or_default(),
            poster_url: poster_url(details.poster_path.as_deref(), PosterSize::Detail)
                .unwrap_or_else(|| POSTER_PLACEHOLDER_URL.to_string()),
            release_date,
            rating,
            runtime,
            cast: cast_preview(credits),
        }
    }
}

fn cast_preview(credits: Option<&Credits>) -> String {
    let names: Vec<&str> = credits
        .map(|credits| {
            credits
                .cast
                .iter()
                .take(CAST_PREVIEW_LEN)
                .map(|member| member.name.as_str())
                .collect()
        })
        .unwrap_or_default();

    if names.is_empty() {
        NO_CAST.to_string()
    } else {
        names.join(", ")
    }
}
