//! Request-level operations for each resource.
//!
//! Services validate a request, then issue the matching repository calls.
//! They hold no state of their own beyond their repository and settings.

mod allocator;
mod news;
mod score;

use thiserror::Error;

use gamefeed_core::storage::RepositoryError;
use gamefeed_core::validation::ValidationError;

pub use allocator::SequentialIdAllocator;
pub use news::NewsService;
pub use score::ScoreService;

/// Errors returned by service operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
pub(crate) mod test_support {
    //! Repository doubles shared by the service tests.

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use gamefeed_core::news::NewsPost;
    use gamefeed_core::score::ScoreEntry;
    use gamefeed_core::storage::{
        ListLimit, NewsRepository, RepositoryError, Result, ScoreRepository,
    };

    /// Counts every call and fails all of them.
    #[derive(Default)]
    pub struct CountingRepository {
        calls: AtomicUsize,
    }

    impl CountingRepository {
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn record<T>(&self) -> Result<T> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(RepositoryError::ConnectionFailed("store unavailable".to_string()))
        }
    }

    #[async_trait]
    impl NewsRepository for CountingRepository {
        async fn highest_post_id(&self, _service: &str) -> Result<Option<i64>> {
            self.record()
        }

        async fn list_posts(&self, _service: &str, _limit: ListLimit) -> Result<Vec<NewsPost>> {
            self.record()
        }

        async fn create_post(&self, _post: &NewsPost) -> Result<()> {
            self.record()
        }

        async fn delete_post(&self, _service: &str, _post_id: i64) -> Result<()> {
            self.record()
        }
    }

    #[async_trait]
    impl ScoreRepository for CountingRepository {
        async fn put_score(&self, _entry: &ScoreEntry) -> Result<()> {
            self.record()
        }

        async fn top_scores(&self, _service: &str, _limit: ListLimit) -> Result<Vec<ScoreEntry>> {
            self.record()
        }

        async fn delete_score(&self, _entry: &ScoreEntry) -> Result<()> {
            self.record()
        }
    }
}
