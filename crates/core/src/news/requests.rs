//! API request types for news operations.
//!
//! Field names match what the game client sends. Validation turns them into
//! domain values without touching the store.

use serde::{Deserialize, Serialize};

use super::types::{NewsDraft, NewsKey};
use crate::serde::deserialize_optional_text;
use crate::validation::{require_integer, require_text, ValidationError};

/// Request payload for `POST /news/postNews/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostNewsRequest {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl PostNewsRequest {
    /// Create a complete request.
    pub fn new(
        service: impl Into<String>,
        heading: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            service: Some(service.into()),
            heading: Some(heading.into()),
            text: Some(text.into()),
        }
    }

    /// Checks that every field is present.
    pub fn validate(self) -> Result<NewsDraft, ValidationError> {
        Ok(NewsDraft {
            service: require_text(self.service, "service")?,
            heading: require_text(self.heading, "heading")?,
            text: require_text(self.text, "text")?,
        })
    }
}

/// Request payload for `POST /news/deleteNews/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteNewsRequest {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(rename = "postID")]
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
}

impl DeleteNewsRequest {
    /// Create a complete request.
    pub fn new(service: impl Into<String>, post_id: i64) -> Self {
        Self {
            service: Some(service.into()),
            post_id: Some(post_id.to_string()),
        }
    }

    /// Checks that both key fields are present and the ID is an integer.
    pub fn validate(self) -> Result<NewsKey, ValidationError> {
        Ok(NewsKey {
            service: require_text(self.service, "service")?,
            post_id: require_integer(self.post_id, "postID")?,
        })
    }
}
