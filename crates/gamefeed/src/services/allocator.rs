use std::sync::Arc;

use gamefeed_core::news::{next_post_id, NewsDraft, NewsPost};
use gamefeed_core::storage::{NewsRepository, RepositoryError, Result};

/// Hands out increasing post identifiers per service partition.
///
/// The next ID is derived from the highest stored one, and the post is then
/// written with a conditional put that fails if the ID was claimed in the
/// meantime. On such a conflict the allocator reads again and retries, so
/// two concurrent posts never overwrite each other.
pub struct SequentialIdAllocator {
    repo: Arc<dyn NewsRepository>,
    max_attempts: u32,
}

impl SequentialIdAllocator {
    pub fn new(repo: Arc<dyn NewsRepository>, max_attempts: u32) -> Self {
        Self {
            repo,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Computes the identifier the next post in `partition` would get.
    pub async fn next_id(&self, partition: &str) -> Result<i64> {
        let highest = self.repo.highest_post_id(partition).await?;
        Ok(next_post_id(highest))
    }

    /// Stores `draft` under the next free identifier of its partition.
    pub async fn insert(&self, draft: &NewsDraft) -> Result<NewsPost> {
        let mut attempt = 1;
        loop {
            let post = draft.with_post_id(self.next_id(&draft.service).await?);
            match self.repo.create_post(&post).await {
                Ok(()) => return Ok(post),
                Err(RepositoryError::AlreadyExists { .. }) if attempt < self.max_attempts => {
                    tracing::debug!(
                        service = %post.service,
                        post_id = post.post_id,
                        attempt,
                        "Post ID claimed concurrently, retrying"
                    );
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
