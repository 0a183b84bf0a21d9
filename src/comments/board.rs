use super::store::CommentStore;
use super::types::{Comment, ANONYMOUS};
use crate::auth::session::AuthSession;
use crate::error::FilmError;

use chrono::Utc;

/// Reads and posts comments on behalf of whoever is signed in.
pub struct CommentBoard<S> {
    store: S,
    session: AuthSession,
}

impl<S: CommentStore> CommentBoard<S> {
    pub fn new(store: S, session: AuthSession) -> Self {
        Self { store, session }
    }

    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Comments for a movie, newest first. A failing store reads as empty.
    pub async fn load(&self, movie_id: &str) -> Vec<Comment> {
        match self.store.query(movie_id).await {
            Ok(comments) => comments,
            Err(e) => {
                tracing::error!("Error fetching comments for {}: {}", movie_id, e);
                Vec::new()
            }
        }
    }

    /// Posts `text` as the current user.
    ///
    /// Fails with `EmptyComment` for blank text and `AuthRequired` when nobody
    /// is signed in; in both cases nothing reaches the store.
    pub async fn post(&self, movie_id: &str, text: &str) -> Result<Comment, FilmError> {
        if text.trim().is_empty() {
            return Err(FilmError::EmptyComment);
        }

        let user = match self.session.current_user() {
            Some(user) => user,
            None => {
                tracing::warn!("Comment on {} rejected: not signed in", movie_id);
                return Err(FilmError::AuthRequired);
            }
        };

        let comment = Comment {
            movie_id: movie_id.to_string(),
            user_id: user.uid.clone(),
            user_name: user.display_name_or(ANONYMOUS).to_string(),
            comment: text.to_string(),
            timestamp: Utc::now(),
        };

        self.store.append(comment.clone()).await?;
        tracing::info!("Comment posted on {} by {}", movie_id, comment.user_id);

        Ok(comment)
    }
}
