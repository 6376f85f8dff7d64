//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Services are built from repository trait objects and
//! injected here explicitly; the backend is chosen via feature flags.

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use gamefeed_core::storage::{NewsRepository, ScoreRepository};

use crate::config::Config;
use crate::services::{NewsService, ScoreService};

/// Shared application state.
///
/// This is cloned for each request handler and contains shared resources.
#[derive(Clone)]
pub struct AppState {
    /// News feed operations.
    pub news: Arc<NewsService>,
    /// Leaderboard operations.
    pub scores: Arc<ScoreService>,
    /// Name reported by the uptime endpoint.
    pub service_name: Arc<str>,
    /// Process start, for the uptime endpoint.
    started_at: Instant,
    /// Number of requests handled so far.
    request_counter: Arc<AtomicU64>,
}

impl AppState {
    /// Creates AppState from explicit repositories and configuration.
    pub fn from_repositories(
        news_repo: Arc<dyn NewsRepository>,
        score_repo: Arc<dyn ScoreRepository>,
        config: &Config,
    ) -> Self {
        let news = NewsService::new(
            news_repo,
            config.game_partition.clone(),
            config.news_list_limit,
            config.post_id_max_attempts,
        );
        let scores = ScoreService::new(
            score_repo,
            config.game_partition.clone(),
            config.scores_list_limit,
        );

        Self {
            news: Arc::new(news),
            scores: Arc::new(scores),
            service_name: Arc::from(config.service_name.as_str()),
            started_at: Instant::now(),
            request_counter: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Time since the state was created.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Counts a request and returns the new total.
    pub fn record_request(&self) -> u64 {
        self.request_counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::storage::{dynamodb::TableNames, DynamoDbRepository};

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let tables = TableNames {
                news: config.news_table.clone(),
                scores: config.scores_table.clone(),
            };
            let repo =
                Arc::new(DynamoDbRepository::connect(tables, config.dynamodb_endpoint.as_deref()).await);

            tracing::info!(
                news_table = %config.news_table,
                scores_table = %config.scores_table,
                "Using DynamoDB storage"
            );

            Ok(Self::from_repositories(repo.clone(), repo, config))
        }
    }
}

#[cfg(all(feature = "inmemory", not(feature = "dynamodb")))]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());

            tracing::warn!("Using in-memory storage, data is lost on shutdown");

            Ok(Self::from_repositories(repo.clone(), repo, config))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl Default for AppState {
        fn default() -> Self {
            let repo = Arc::new(InMemoryRepository::new());
            Self::from_repositories(repo.clone(), repo, &Config::default())
        }
    }
}
