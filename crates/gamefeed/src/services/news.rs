use std::sync::Arc;

use gamefeed_core::news::{DeleteNewsRequest, NewsKey, NewsPost, PostNewsRequest};
use gamefeed_core::storage::{ListLimit, NewsRepository};

use super::{Result, SequentialIdAllocator};

/// News feed operations.
pub struct NewsService {
    repo: Arc<dyn NewsRepository>,
    allocator: SequentialIdAllocator,
    partition: String,
    list_limit: ListLimit,
}

impl NewsService {
    pub fn new(
        repo: Arc<dyn NewsRepository>,
        partition: impl Into<String>,
        list_limit: ListLimit,
        max_id_attempts: u32,
    ) -> Self {
        Self {
            allocator: SequentialIdAllocator::new(repo.clone(), max_id_attempts),
            repo,
            partition: partition.into(),
            list_limit,
        }
    }

    /// Validates and stores a new post under the next free ID.
    pub async fn post_news(&self, request: PostNewsRequest) -> Result<NewsPost> {
        let draft = request.validate()?;
        let post = self.allocator.insert(&draft).await?;

        tracing::info!(service = %post.service, post_id = post.post_id, "Created news post");
        Ok(post)
    }

    /// Lists the feed partition, newest first.
    pub async fn list_news(&self) -> Result<Vec<NewsPost>> {
        let posts = self.repo.list_posts(&self.partition, self.list_limit).await?;
        Ok(posts)
    }

    /// Deletes a post by key. Succeeds even when nothing matched.
    pub async fn delete_news(&self, request: DeleteNewsRequest) -> Result<NewsKey> {
        let key = request.validate()?;
        self.repo.delete_post(&key.service, key.post_id).await?;

        tracing::info!(service = %key.service, post_id = key.post_id, "Deleted news post");
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gamefeed_core::validation::ValidationError;

    use crate::services::test_support::CountingRepository;
    use crate::services::ServiceError;
    use crate::storage::InMemoryRepository;

    fn service_with(repo: Arc<dyn NewsRepository>, limit: u32) -> NewsService {
        NewsService::new(repo, "VERSION1", ListLimit::new(limit).unwrap(), 5)
    }

    #[tokio::test]
    async fn test_post_news_assigns_increasing_ids() {
        let service = service_with(Arc::new(InMemoryRepository::new()), 50);

        let first = service
            .post_news(PostNewsRequest::new("VERSION1", "Patch", "Fixed bugs"))
            .await
            .unwrap();
        let second = service
            .post_news(PostNewsRequest::new("VERSION1", "Patch", "Fixed bugs"))
            .await
            .unwrap();

        assert_eq!(first.post_id, 0);
        assert_eq!(second.post_id, 1);
    }

    #[tokio::test]
    async fn test_ids_are_per_partition() {
        let service = service_with(Arc::new(InMemoryRepository::new()), 50);

        service
            .post_news(PostNewsRequest::new("VERSION1", "One", "First"))
            .await
            .unwrap();
        let other = service
            .post_news(PostNewsRequest::new("VERSION2", "Two", "Second"))
            .await
            .unwrap();

        assert_eq!(other.post_id, 0);
    }

    #[tokio::test]
    async fn test_list_news_descending_and_limited() {
        let service = service_with(Arc::new(InMemoryRepository::new()), 3);
        for i in 0..5 {
            service
                .post_news(PostNewsRequest::new("VERSION1", format!("H{i}"), "body"))
                .await
                .unwrap();
        }
        service
            .post_news(PostNewsRequest::new("VERSION2", "Other", "body"))
            .await
            .unwrap();

        let posts = service.list_news().await.unwrap();
        let ids: Vec<i64> = posts.iter().map(|p| p.post_id).collect();

        assert_eq!(ids, vec![4, 3, 2]);
        assert!(posts.iter().all(|p| p.service == "VERSION1"));
    }

    #[tokio::test]
    async fn test_delete_news_missing_post_succeeds() {
        let service = service_with(Arc::new(InMemoryRepository::new()), 50);

        let key = service
            .delete_news(DeleteNewsRequest::new("VERSION1", 99))
            .await
            .unwrap();
        assert_eq!(key.post_id, 99);
    }

    #[tokio::test]
    async fn test_delete_news_removes_post() {
        let service = service_with(Arc::new(InMemoryRepository::new()), 50);
        service
            .post_news(PostNewsRequest::new("VERSION1", "Patch", "Fixed bugs"))
            .await
            .unwrap();

        service
            .delete_news(DeleteNewsRequest::new("VERSION1", 0))
            .await
            .unwrap();

        assert!(service.list_news().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_requests_never_reach_the_store() {
        let repo = Arc::new(CountingRepository::default());
        let service = service_with(repo.clone(), 50);

        let result = service
            .post_news(PostNewsRequest {
                heading: Some("Patch".to_string()),
                ..Default::default()
            })
            .await;
        assert_eq!(
            result,
            Err(ServiceError::Validation(ValidationError::MissingField("service")))
        );

        let result = service
            .delete_news(DeleteNewsRequest {
                service: Some("VERSION1".to_string()),
                post_id: None,
            })
            .await;
        assert_eq!(
            result,
            Err(ServiceError::Validation(ValidationError::MissingField("postID")))
        );

        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_store_errors_are_passed_through() {
        let repo = Arc::new(CountingRepository::default());
        let service = service_with(repo.clone(), 50);

        let result = service.list_news().await;
        assert!(matches!(result, Err(ServiceError::Repository(_))));
        assert_eq!(repo.calls(), 1);
    }
}
