use serde::{Deserialize, Serialize};

/// A leaderboard row keyed by `(service, highscore)`.
///
/// Two players posting the same score for the same service share a key, so
/// the later post replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScoreEntry {
    pub service: String,
    pub highscore: i64,
    pub name: String,
}

impl ScoreEntry {
    pub fn new(service: impl Into<String>, highscore: i64, name: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            highscore,
            name: name.into(),
        }
    }

    /// Identifier used in logs and error messages.
    pub fn key_display(&self) -> String {
        format!("{}/{}", self.service, self.highscore)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_entry_uses_store_attribute_names() {
        let entry = ScoreEntry::new("VERSION1", 100, "Alice");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["Service"], "VERSION1");
        assert_eq!(json["Highscore"], 100);
        assert_eq!(json["Name"], "Alice");
        assert_eq!(entry.key_display(), "VERSION1/100");
    }
}
