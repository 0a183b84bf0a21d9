use super::types::Comment;
use crate::error::FilmError;

use dashmap::DashMap;
use std::future::Future;

/// Document store holding comments.
///
/// Each call is expected to resolve atomically; there is no offline queue
/// and no conflict handling.
pub trait CommentStore: Send + Sync {
    /// All comments for `movie_id`, newest first.
    fn query(&self, movie_id: &str) -> impl Future<Output = Result<Vec<Comment>, FilmError>> + Send;

    fn append(&self, comment: Comment) -> impl Future<Output = Result<(), FilmError>> + Send;
}

/// Process-local store, sharded by movie id.
#[derive(Default)]
pub struct MemoryCommentStore {
    documents: DashMap<String, Vec<Comment>>,
}

impl MemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of comments across all movies.
    pub fn len(&self) -> usize {
        self.documents.iter().map(|entry| entry.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CommentStore for MemoryCommentStore {
    async fn query(&self, movie_id: &str) -> Result<Vec<Comment>, FilmError> {
        let mut comments = self
            .documents
            .get(movie_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();

        // Reversed first so equal timestamps keep the latest insert on top.
        comments.reverse();
        comments.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(comments)
    }

    async fn append(&self, comment: Comment) -> Result<(), FilmError> {
        self.documents
            .entry(comment.movie_id.clone())
            .or_default()
            .push(comment);

        Ok(())
    }
}
