//! API request types for leaderboard operations.

use serde::{Deserialize, Serialize};

use super::types::ScoreEntry;
use crate::serde::deserialize_optional_text;
use crate::validation::{require_integer, require_text, ValidationError};

/// Request payload for `POST /score/postScore/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostScoreRequest {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highscore: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PostScoreRequest {
    /// Create a complete request.
    pub fn new(service: impl Into<String>, highscore: i64, name: impl Into<String>) -> Self {
        Self {
            service: Some(service.into()),
            highscore: Some(highscore.to_string()),
            name: Some(name.into()),
        }
    }

    pub fn validate(self) -> Result<ScoreEntry, ValidationError> {
        validate_entry(self.service, self.highscore, self.name)
    }
}

/// Request payload for `POST /score/deleteScore/`.
///
/// The name is the expected current holder of the score; the delete only
/// happens when it matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteScoreRequest {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highscore: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DeleteScoreRequest {
    /// Create a complete request.
    pub fn new(service: impl Into<String>, highscore: i64, name: impl Into<String>) -> Self {
        Self {
            service: Some(service.into()),
            highscore: Some(highscore.to_string()),
            name: Some(name.into()),
        }
    }

    pub fn validate(self) -> Result<ScoreEntry, ValidationError> {
        validate_entry(self.service, self.highscore, self.name)
    }
}

fn validate_entry(
    service: Option<String>,
    highscore: Option<String>,
    name: Option<String>,
) -> Result<ScoreEntry, ValidationError> {
    Ok(ScoreEntry {
        service: require_text(service, "service")?,
        highscore: require_integer(highscore, "highscore")?,
        name: require_text(name, "name")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_score_accepts_string_highscore() {
        let request: PostScoreRequest = serde_json::from_str(
            r#"{"service": "VERSION1", "highscore": "100", "name": "Alice"}"#,
        )
        .unwrap();

        assert_eq!(
            request.validate(),
            Ok(ScoreEntry::new("VERSION1", 100, "Alice"))
        );
    }

    #[test]
    fn test_post_score_missing_name() {
        let request: PostScoreRequest =
            serde_json::from_str(r#"{"service": "VERSION1", "highscore": 100}"#).unwrap();

        assert_eq!(request.validate(), Err(ValidationError::MissingField("name")));
    }

    #[test]
    fn test_delete_score_rejects_non_integer_highscore() {
        let request: DeleteScoreRequest = serde_json::from_str(
            r#"{"service": "VERSION1", "highscore": "lots", "name": "Alice"}"#,
        )
        .unwrap();

        assert_eq!(
            request.validate(),
            Err(ValidationError::InvalidNumber {
                field: "highscore",
                value: "lots".to_string()
            })
        );
    }
}
