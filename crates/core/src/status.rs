//! Response bodies that are not entity lists.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The `{"msg": ...}` body returned by every write endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UptimeResponse {
    #[serde(rename = "Time Active")]
    pub time_active: String,
}

/// Formats process uptime as `<name> online for N.NN mins`.
pub fn format_uptime(name: &str, elapsed: Duration) -> String {
    format!("{name} online for {:.2} mins", elapsed.as_secs_f64() / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(
            format_uptime("gamefeed", Duration::from_secs(90)),
            "gamefeed online for 1.50 mins"
        );
        assert_eq!(
            format_uptime("gamefeed", Duration::ZERO),
            "gamefeed online for 0.00 mins"
        );
    }

    #[test]
    fn test_uptime_response_field_name() {
        let body = UptimeResponse {
            time_active: "gamefeed online for 0.00 mins".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["Time Active"], "gamefeed online for 0.00 mins");
    }
}
