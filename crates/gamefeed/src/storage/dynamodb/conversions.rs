//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use gamefeed_core::news::NewsPost;
use gamefeed_core::score::ScoreEntry;
use gamefeed_core::storage::RepositoryError;

use super::keys;

// ============================================================================
// News conversions
// ============================================================================

/// Convert a NewsPost to DynamoDB item.
pub fn news_post_to_item(post: &NewsPost) -> HashMap<String, AttributeValue> {
    let mut item = keys::news_key(&post.service, post.post_id);
    item.insert(
        keys::HEADING.to_string(),
        AttributeValue::S(post.heading.clone()),
    );
    item.insert(keys::TEXT.to_string(), AttributeValue::S(post.text.clone()));
    item
}

/// Convert a DynamoDB item to NewsPost.
pub fn item_to_news_post(
    item: &HashMap<String, AttributeValue>,
) -> Result<NewsPost, RepositoryError> {
    Ok(NewsPost {
        service: get_string(item, keys::SERVICE)?,
        post_id: get_number(item, keys::POST_ID)?,
        heading: get_string(item, keys::HEADING)?,
        text: get_string(item, keys::TEXT)?,
    })
}

// ============================================================================
// Score conversions
// ============================================================================

/// Convert a ScoreEntry to DynamoDB item.
pub fn score_to_item(entry: &ScoreEntry) -> HashMap<String, AttributeValue> {
    let mut item = keys::score_key(&entry.service, entry.highscore);
    item.insert(keys::NAME.to_string(), AttributeValue::S(entry.name.clone()));
    item
}

/// Convert a DynamoDB item to ScoreEntry.
pub fn item_to_score(
    item: &HashMap<String, AttributeValue>,
) -> Result<ScoreEntry, RepositoryError> {
    Ok(ScoreEntry {
        service: get_string(item, keys::SERVICE)?,
        highscore: get_number(item, keys::HIGHSCORE)?,
        name: get_string(item, keys::NAME)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required integer attribute.
pub fn get_number(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<i64, RepositoryError> {
    let raw = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?;
    raw.parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}
