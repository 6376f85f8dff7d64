use std::sync::Arc;

use gamefeed_core::score::{DeleteScoreRequest, PostScoreRequest, ScoreEntry};
use gamefeed_core::storage::{ListLimit, ScoreRepository};

use super::Result;

/// Leaderboard operations.
pub struct ScoreService {
    repo: Arc<dyn ScoreRepository>,
    partition: String,
    list_limit: ListLimit,
}

impl ScoreService {
    pub fn new(
        repo: Arc<dyn ScoreRepository>,
        partition: impl Into<String>,
        list_limit: ListLimit,
    ) -> Self {
        Self {
            repo,
            partition: partition.into(),
            list_limit,
        }
    }

    /// Validates and writes a score, replacing any row with the same key.
    pub async fn post_score(&self, request: PostScoreRequest) -> Result<ScoreEntry> {
        let entry = request.validate()?;
        self.repo.put_score(&entry).await?;

        tracing::info!(
            service = %entry.service,
            highscore = entry.highscore,
            name = %entry.name,
            "Posted score"
        );
        Ok(entry)
    }

    /// Lists the best scores of the leaderboard partition.
    pub async fn top_scores(&self) -> Result<Vec<ScoreEntry>> {
        let scores = self.repo.top_scores(&self.partition, self.list_limit).await?;
        Ok(scores)
    }

    /// Deletes a score if it is still held by the named player.
    pub async fn delete_score(&self, request: DeleteScoreRequest) -> Result<ScoreEntry> {
        let entry = request.validate()?;
        self.repo.delete_score(&entry).await?;

        tracing::info!(
            service = %entry.service,
            highscore = entry.highscore,
            name = %entry.name,
            "Deleted score"
        );
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gamefeed_core::storage::RepositoryError;
    use gamefeed_core::validation::ValidationError;

    use crate::services::test_support::CountingRepository;
    use crate::services::ServiceError;
    use crate::storage::InMemoryRepository;

    fn service_with(repo: Arc<dyn ScoreRepository>) -> ScoreService {
        ScoreService::new(repo, "VERSION1", ListLimit::TOP_SCORES)
    }

    #[tokio::test]
    async fn test_top_scores_descending_and_capped() {
        let service = service_with(Arc::new(InMemoryRepository::new()));
        for (score, name) in [(10, "a"), (70, "b"), (30, "c"), (90, "d"), (50, "e"), (20, "f")] {
            service
                .post_score(PostScoreRequest::new("VERSION1", score, name))
                .await
                .unwrap();
        }

        let scores = service.top_scores().await.unwrap();
        let values: Vec<i64> = scores.iter().map(|s| s.highscore).collect();

        assert_eq!(values, vec![90, 70, 50, 30, 20]);
    }

    #[tokio::test]
    async fn test_same_score_overwrites_name() {
        let service = service_with(Arc::new(InMemoryRepository::new()));
        service
            .post_score(PostScoreRequest::new("VERSION1", 100, "Alice"))
            .await
            .unwrap();
        service
            .post_score(PostScoreRequest::new("VERSION1", 100, "Bob"))
            .await
            .unwrap();

        let scores = service.top_scores().await.unwrap();
        assert_eq!(scores, vec![ScoreEntry::new("VERSION1", 100, "Bob")]);
    }

    #[tokio::test]
    async fn test_delete_score_with_wrong_name_keeps_row() {
        let service = service_with(Arc::new(InMemoryRepository::new()));
        service
            .post_score(PostScoreRequest::new("VERSION1", 100, "Bob"))
            .await
            .unwrap();

        let result = service
            .delete_score(DeleteScoreRequest::new("VERSION1", 100, "Alice"))
            .await;

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::NotFound { .. }))
        ));
        assert_eq!(service.top_scores().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_score_fails() {
        let service = service_with(Arc::new(InMemoryRepository::new()));

        let result = service
            .delete_score(DeleteScoreRequest::new("VERSION1", 100, "Alice"))
            .await;
        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::NotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_delete_score_with_matching_name() {
        let service = service_with(Arc::new(InMemoryRepository::new()));
        service
            .post_score(PostScoreRequest::new("VERSION1", 100, "Bob"))
            .await
            .unwrap();

        let deleted = service
            .delete_score(DeleteScoreRequest::new("VERSION1", 100, "Bob"))
            .await
            .unwrap();

        assert_eq!(deleted.name, "Bob");
        assert!(service.top_scores().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_requests_never_reach_the_store() {
        let repo = Arc::new(CountingRepository::default());
        let service = service_with(repo.clone());

        let result = service
            .post_score(PostScoreRequest {
                service: Some("VERSION1".to_string()),
                highscore: Some("100".to_string()),
                name: None,
            })
            .await;
        assert_eq!(
            result,
            Err(ServiceError::Validation(ValidationError::MissingField("name")))
        );

        let result = service
            .delete_score(DeleteScoreRequest {
                service: None,
                highscore: Some("100".to_string()),
                name: Some("Alice".to_string()),
            })
            .await;
        assert_eq!(
            result,
            Err(ServiceError::Validation(ValidationError::MissingField("service")))
        );

        assert_eq!(repo.calls(), 0);
    }
}
