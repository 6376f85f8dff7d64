use async_trait::async_trait;

use crate::news::NewsPost;
use crate::score::ScoreEntry;

use super::{ListLimit, Result};

/// Repository for news posts, partitioned by service.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Gets the highest post ID stored for a service, if any.
    async fn highest_post_id(&self, service: &str) -> Result<Option<i64>>;

    /// Lists posts for a service, highest post ID first.
    async fn list_posts(&self, service: &str, limit: ListLimit) -> Result<Vec<NewsPost>>;

    /// Creates a post.
    ///
    /// Fails with `AlreadyExists` when the `(service, post_id)` key is
    /// taken, so concurrent writers can never overwrite each other.
    async fn create_post(&self, post: &NewsPost) -> Result<()>;

    /// Deletes a post by key. Deleting a missing post is not an error.
    async fn delete_post(&self, service: &str, post_id: i64) -> Result<()>;
}

/// Repository for leaderboard rows, partitioned by service.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Writes a score, replacing any row with the same `(service, highscore)`.
    async fn put_score(&self, entry: &ScoreEntry) -> Result<()>;

    /// Lists scores for a service, highest first.
    async fn top_scores(&self, service: &str, limit: ListLimit) -> Result<Vec<ScoreEntry>>;

    /// Deletes the row at `(service, highscore)` only if its name matches.
    ///
    /// Fails with `NotFound` when the row is missing or held by someone
    /// else.
    async fn delete_score(&self, entry: &ScoreEntry) -> Result<()>;
}
