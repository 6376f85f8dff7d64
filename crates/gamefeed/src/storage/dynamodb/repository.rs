//! DynamoDB repository implementation.
//!
//! Implements the repository traits from `gamefeed_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use gamefeed_core::news::{NewsPost, FIRST_POST_ID};
use gamefeed_core::score::ScoreEntry;
use gamefeed_core::storage::{ListLimit, NewsRepository, Result, ScoreRepository};

use super::conversions::{
    get_number, item_to_news_post, item_to_score, news_post_to_item, score_to_item,
};
use super::error::{map_delete_item_error, map_put_item_error, map_query_error};
use super::keys;

/// Names of the two tables the repository reads and writes.
#[derive(Debug, Clone)]
pub struct TableNames {
    pub news: String,
    pub scores: String,
}

/// DynamoDB-based repository implementation.
///
/// Provides async access to DynamoDB storage for news posts and scores.
pub struct DynamoDbRepository {
    client: Client,
    tables: TableNames,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table names.
    pub fn new(client: Client, tables: TableNames) -> Self {
        Self { client, tables }
    }

    /// Creates a new repository from the AWS environment.
    ///
    /// Region and credentials come from the SDK default chain (shared
    /// config files, environment, instance metadata). `endpoint_url`
    /// points the client at a local DynamoDB when set.
    pub async fn connect(tables: TableNames, endpoint_url: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint) = endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        Self::new(Client::new(&sdk_config), tables)
    }

    /// Queries one partition of a table, sort key descending.
    async fn query_partition(
        &self,
        table: &str,
        sort_key: &str,
        service: &str,
        floor: Option<i64>,
        limit: ListLimit,
    ) -> Result<Vec<HashMap<String, AttributeValue>>> {
        let expressions = keys::partition_query(sort_key, service, floor);

        let result = self
            .client
            .query()
            .table_name(table)
            .key_condition_expression(expressions.key_condition)
            .set_expression_attribute_names(Some(expressions.names))
            .set_expression_attribute_values(Some(expressions.values))
            .scan_index_forward(false)
            .limit(limit.as_i32())
            .send()
            .await
            .map_err(map_query_error)?;

        Ok(result.items.unwrap_or_default())
    }
}

// ============================================================================
// NewsRepository implementation
// ============================================================================

#[async_trait]
impl NewsRepository for DynamoDbRepository {
    async fn highest_post_id(&self, service: &str) -> Result<Option<i64>> {
        let items = self
            .query_partition(
                &self.tables.news,
                keys::POST_ID,
                service,
                Some(FIRST_POST_ID),
                ListLimit::SINGLE,
            )
            .await?;

        items
            .first()
            .map(|item| get_number(item, keys::POST_ID))
            .transpose()
    }

    async fn list_posts(&self, service: &str, limit: ListLimit) -> Result<Vec<NewsPost>> {
        let items = self
            .query_partition(
                &self.tables.news,
                keys::POST_ID,
                service,
                Some(FIRST_POST_ID),
                limit,
            )
            .await?;

        items.iter().map(item_to_news_post).collect()
    }

    async fn create_post(&self, post: &NewsPost) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.tables.news)
            .set_item(Some(news_post_to_item(post)))
            .condition_expression(keys::POST_ID_UNCLAIMED)
            .expression_attribute_names(keys::SORT_KEY_NAME, keys::POST_ID)
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "NewsPost", post.key().to_string()))?;

        Ok(())
    }

    async fn delete_post(&self, service: &str, post_id: i64) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.tables.news)
            .set_key(Some(keys::news_key(service, post_id)))
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, "NewsPost", format!("{service}/{post_id}")))?;

        Ok(())
    }
}

// ============================================================================
// ScoreRepository implementation
// ============================================================================

#[async_trait]
impl ScoreRepository for DynamoDbRepository {
    async fn put_score(&self, entry: &ScoreEntry) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.tables.scores)
            .set_item(Some(score_to_item(entry)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "ScoreEntry", entry.key_display()))?;

        Ok(())
    }

    async fn top_scores(&self, service: &str, limit: ListLimit) -> Result<Vec<ScoreEntry>> {
        let items = self
            .query_partition(&self.tables.scores, keys::HIGHSCORE, service, None, limit)
            .await?;

        items.iter().map(item_to_score).collect()
    }

    async fn delete_score(&self, entry: &ScoreEntry) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.tables.scores)
            .set_key(Some(keys::score_key(&entry.service, entry.highscore)))
            .condition_expression(keys::NAME_MATCHES)
            .expression_attribute_names(keys::NAME_NAME, keys::NAME)
            .expression_attribute_values(keys::NAME_VALUE, AttributeValue::S(entry.name.clone()))
            .send()
            .await
            .map_err(|e| {
                map_delete_item_error(
                    e,
                    "ScoreEntry",
                    format!("{} held by {}", entry.key_display(), entry.name),
                )
            })?;

        Ok(())
    }
}
