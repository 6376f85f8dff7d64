//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use gamefeed_core::news::{NewsPost, FIRST_POST_ID};
use gamefeed_core::score::ScoreEntry;
use gamefeed_core::storage::{
    ListLimit, NewsRepository, RepositoryError, Result, ScoreRepository,
};

type TableKey = (String, i64);

/// In-memory storage backend.
///
/// Uses BTreeMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    news: Arc<RwLock<BTreeMap<TableKey, NewsPost>>>,
    scores: Arc<RwLock<BTreeMap<TableKey, ScoreEntry>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Inclusive key range covering sort keys `from..` of one partition.
fn partition_range(service: &str, from: i64) -> std::ops::RangeInclusive<TableKey> {
    (service.to_string(), from)..=(service.to_string(), i64::MAX)
}

#[async_trait]
impl NewsRepository for InMemoryRepository {
    async fn highest_post_id(&self, service: &str) -> Result<Option<i64>> {
        let news = self.news.read().await;
        Ok(news
            .range(partition_range(service, FIRST_POST_ID))
            .next_back()
            .map(|((_, post_id), _)| *post_id))
    }

    async fn list_posts(&self, service: &str, limit: ListLimit) -> Result<Vec<NewsPost>> {
        let news = self.news.read().await;
        Ok(news
            .range(partition_range(service, FIRST_POST_ID))
            .rev()
            .take(limit.as_usize())
            .map(|(_, post)| post.clone())
            .collect())
    }

    async fn create_post(&self, post: &NewsPost) -> Result<()> {
        let mut news = self.news.write().await;
        let key = (post.service.clone(), post.post_id);
        if news.contains_key(&key) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "NewsPost",
                id: post.key().to_string(),
            });
        }
        news.insert(key, post.clone());
        Ok(())
    }

    async fn delete_post(&self, service: &str, post_id: i64) -> Result<()> {
        let mut news = self.news.write().await;
        news.remove(&(service.to_string(), post_id));
        Ok(())
    }
}

#[async_trait]
impl ScoreRepository for InMemoryRepository {
    async fn put_score(&self, entry: &ScoreEntry) -> Result<()> {
        let mut scores = self.scores.write().await;
        scores.insert((entry.service.clone(), entry.highscore), entry.clone());
        Ok(())
    }

    async fn top_scores(&self, service: &str, limit: ListLimit) -> Result<Vec<ScoreEntry>> {
        let scores = self.scores.read().await;
        Ok(scores
            .range(partition_range(service, i64::MIN))
            .rev()
            .take(limit.as_usize())
            .map(|(_, entry)| entry.clone())
            .collect())
    }

    async fn delete_score(&self, entry: &ScoreEntry) -> Result<()> {
        let mut scores = self.scores.write().await;
        let key = (entry.service.clone(), entry.highscore);
        match scores.get(&key) {
            Some(stored) if stored.name == entry.name => {
                scores.remove(&key);
                Ok(())
            }
            _ => Err(RepositoryError::NotFound {
                entity_type: "ScoreEntry",
                id: format!("{} held by {}", entry.key_display(), entry.name),
            }),
        }
    }
}
