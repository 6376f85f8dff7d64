//! Serde helper functions for request deserialization.
//!
//! Game clients send the same field as a JSON string, a JSON number or a
//! form value depending on the platform. These helpers normalise all of
//! them to an optional string and treat blanks as missing so validation can
//! report a single, consistent error.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

/// Deserialize an optional text field, accepting strings or numbers.
///
/// Empty and whitespace-only strings become `None`. Numbers are rendered
/// with their canonical JSON representation.
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<TextOrNumber> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(TextOrNumber::Text(s)) => Some(s).filter(|s| !s.trim().is_empty()),
        Some(TextOrNumber::Number(n)) => Some(n.to_string()),
        None => None,
    })
}
