use super::api::ApiClient;
use crate::comments::types::Comment;
use crate::error::FilmError;
use crate::movies::view::MovieView;

/// Everything the detail page renders for one movie.
#[derive(Debug, Clone, PartialEq)]
pub struct MoviePage {
    pub view: MovieView,
    pub comments: Vec<Comment>,
}

impl MoviePage {
    /// Fetches details, credits and comments concurrently.
    ///
    /// Only the details are required. Missing credits show as "Cast not
    /// available" and unreadable comments as an empty thread.
    pub async fn load(api: &ApiClient, movie_id: &str) -> Result<Self, FilmError> {
        let (details, credits, comments) = tokio::join!(
            api.movie_details(movie_id),
            api.movie_credits(movie_id),
            api.comments(movie_id)
        );

        let details = details?;

        let credits = credits
            .map_err(|e| tracing::warn!("Credits for {} unavailable: {}", movie_id, e))
            .ok();

        let comments = comments.unwrap_or_else(|e| {
            tracing::warn!("Comments for {} unavailable: {}", movie_id, e);
            Vec::new()
        });

        Ok(Self {
            view: MovieView::new(&details, credits.as_ref()),
            comments,
        })
    }
}
