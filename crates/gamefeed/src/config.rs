use std::env;

use gamefeed_core::storage::ListLimit;

/// Port used when none is configured.
pub const DEFAULT_PORT: &str = "3005";

/// Port used when the configured value cannot be bound.
pub const FALLBACK_PORT: u16 = 3000;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name reported by `GET /` (default: "gamefeed")
    pub service_name: String,
    /// Partition served by the list endpoints (default: "VERSION1")
    pub game_partition: String,
    /// News table name (default: "news")
    pub news_table: String,
    /// Scores table name (default: "scores")
    pub scores_table: String,
    /// Maximum posts returned by the news feed (default: 50)
    pub news_list_limit: ListLimit,
    /// Maximum rows returned by the leaderboard (default: 5)
    pub scores_list_limit: ListLimit,
    /// Attempts made to claim a post ID before giving up (default: 5)
    pub post_id_max_attempts: u32,
    /// Custom DynamoDB endpoint, e.g. a local DynamoDB container
    #[allow(dead_code)]
    pub dynamodb_endpoint: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SERVICE_NAME` - Name reported by the uptime endpoint (default: "gamefeed")
    /// - `GAME_PARTITION` - Partition served by list endpoints (default: "VERSION1")
    /// - `NEWS_TABLE` - News table name (default: "news")
    /// - `SCORES_TABLE` - Scores table name (default: "scores")
    /// - `NEWS_LIST_LIMIT` - News feed size (default: 50)
    /// - `SCORES_LIST_LIMIT` - Leaderboard size (default: 5)
    /// - `POST_ID_MAX_ATTEMPTS` - Post ID allocation attempts (default: 5)
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (default: none)
    ///
    /// AWS region and credentials are read by the AWS SDK from its own
    /// shared config files and environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            game_partition: env::var("GAME_PARTITION").unwrap_or(defaults.game_partition),
            news_table: env::var("NEWS_TABLE").unwrap_or(defaults.news_table),
            scores_table: env::var("SCORES_TABLE").unwrap_or(defaults.scores_table),
            news_list_limit: list_limit_var("NEWS_LIST_LIMIT").unwrap_or(defaults.news_list_limit),
            scores_list_limit: list_limit_var("SCORES_LIST_LIMIT")
                .unwrap_or(defaults.scores_list_limit),
            post_id_max_attempts: env::var("POST_ID_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|attempts| *attempts > 0)
                .unwrap_or(defaults.post_id_max_attempts),
            dynamodb_endpoint: env::var("AWS_ENDPOINT_URL").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "gamefeed".to_string(),
            game_partition: "VERSION1".to_string(),
            news_table: "news".to_string(),
            scores_table: "scores".to_string(),
            news_list_limit: ListLimit::NEWS,
            scores_list_limit: ListLimit::TOP_SCORES,
            post_id_max_attempts: 5,
            dynamodb_endpoint: None,
        }
    }
}

fn list_limit_var(name: &str) -> Option<ListLimit> {
    let raw = env::var(name).ok()?;
    let Ok(value) = raw.parse::<u32>() else {
        tracing::warn!(variable = name, value = %raw, "Ignoring non-numeric list limit");
        return None;
    };
    ListLimit::new(value)
        .map_err(|e| tracing::warn!(variable = name, error = %e, "Ignoring invalid list limit"))
        .ok()
}

/// Resolve the listening port, falling back to [`FALLBACK_PORT`] when the
/// supplied value is not a usable port number.
pub fn resolve_port(raw: &str) -> u16 {
    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => port,
        _ => {
            tracing::warn!(value = %raw, fallback = FALLBACK_PORT, "Invalid port, using fallback");
            FALLBACK_PORT
        }
    }
}
