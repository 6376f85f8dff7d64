//! DynamoDB attribute names and key construction.
//!
//! `Name` and `Text` are DynamoDB reserved words, so every expression refers
//! to attributes through the `#` placeholders defined here.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

// ============================================================================
// Attribute names
// ============================================================================

pub const SERVICE: &str = "Service";
pub const POST_ID: &str = "PostID";
pub const HEADING: &str = "Heading";
pub const TEXT: &str = "Text";
pub const HIGHSCORE: &str = "Highscore";
pub const NAME: &str = "Name";

// ============================================================================
// Expression placeholders
// ============================================================================

pub const SERVICE_NAME: &str = "#service";
pub const SORT_KEY_NAME: &str = "#sk";
pub const NAME_NAME: &str = "#name";

pub const SERVICE_VALUE: &str = ":service";
pub const FLOOR_VALUE: &str = ":floor";
pub const NAME_VALUE: &str = ":name";

/// Key condition selecting one partition from a sort key floor upwards.
pub const PARTITION_FROM_FLOOR: &str = "#service = :service AND #sk >= :floor";

/// Key condition selecting a whole partition.
pub const PARTITION: &str = "#service = :service";

/// Condition rejecting a put when the post key is already taken.
pub const POST_ID_UNCLAIMED: &str = "attribute_not_exists(#sk)";

/// Condition allowing a score delete only when the holder matches.
pub const NAME_MATCHES: &str = "#name = :name";

/// Encode an integer as a DynamoDB number.
pub fn number(value: i64) -> AttributeValue {
    AttributeValue::N(value.to_string())
}

/// Expressions for a query over one partition.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionQuery {
    pub key_condition: &'static str,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Build the key condition for `service`, optionally bounded below by
/// `floor` on `sort_key`.
///
/// `#sk` and `:floor` are only registered together with the floor; DynamoDB
/// rejects placeholders that the expression does not use.
pub fn partition_query(sort_key: &str, service: &str, floor: Option<i64>) -> PartitionQuery {
    let mut names = HashMap::from([(SERVICE_NAME.to_string(), SERVICE.to_string())]);
    let mut values = HashMap::from([(
        SERVICE_VALUE.to_string(),
        AttributeValue::S(service.to_string()),
    )]);

    let key_condition = match floor {
        Some(floor) => {
            names.insert(SORT_KEY_NAME.to_string(), sort_key.to_string());
            values.insert(FLOOR_VALUE.to_string(), number(floor));
            PARTITION_FROM_FLOOR
        }
        None => PARTITION,
    };

    PartitionQuery {
        key_condition,
        names,
        values,
    }
}

/// Generate the primary key of a news post.
pub fn news_key(service: &str, post_id: i64) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (SERVICE.to_string(), AttributeValue::S(service.to_string())),
        (POST_ID.to_string(), number(post_id)),
    ])
}

/// Generate the primary key of a leaderboard row.
pub fn score_key(service: &str, highscore: i64) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (SERVICE.to_string(), AttributeValue::S(service.to_string())),
        (HIGHSCORE.to_string(), number(highscore)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_encoding() {
        assert_eq!(number(42), AttributeValue::N("42".to_string()));
        assert_eq!(number(-1), AttributeValue::N("-1".to_string()));
    }

    #[test]
    fn test_partition_query_with_floor() {
        let query = partition_query(POST_ID, "VERSION1", Some(0));

        assert_eq!(query.key_condition, PARTITION_FROM_FLOOR);
        assert_eq!(
            query.names,
            HashMap::from([
                ("#service".to_string(), "Service".to_string()),
                ("#sk".to_string(), "PostID".to_string()),
            ])
        );
        assert_eq!(
            query.values,
            HashMap::from([
                (":service".to_string(), AttributeValue::S("VERSION1".to_string())),
                (":floor".to_string(), AttributeValue::N("0".to_string())),
            ])
        );
    }

    #[test]
    fn test_partition_query_without_floor_registers_no_sort_key() {
        let query = partition_query(HIGHSCORE, "VERSION1", None);

        assert_eq!(query.key_condition, PARTITION);
        assert_eq!(
            query.names,
            HashMap::from([("#service".to_string(), "Service".to_string())])
        );
        assert_eq!(
            query.values,
            HashMap::from([(":service".to_string(), AttributeValue::S("VERSION1".to_string()))])
        );
    }

    #[test]
    fn test_partition_query_placeholders_all_used() {
        for floor in [Some(0), None] {
            let query = partition_query(HIGHSCORE, "VERSION1", floor);
            for placeholder in query.names.keys().chain(query.values.keys()) {
                assert!(
                    query.key_condition.contains(placeholder.as_str()),
                    "{placeholder} unused in {}",
                    query.key_condition
                );
            }
        }
    }

    #[test]
    fn test_news_key() {
        let key = news_key("VERSION1", 3);
        assert_eq!(key.len(), 2);
        assert_eq!(key.get(SERVICE).unwrap().as_s().unwrap(), "VERSION1");
        assert_eq!(key.get(POST_ID).unwrap().as_n().unwrap(), "3");
    }

    #[test]
    fn test_score_key() {
        let key = score_key("VERSION1", 100);
        assert_eq!(key.len(), 2);
        assert_eq!(key.get(SERVICE).unwrap().as_s().unwrap(), "VERSION1");
        assert_eq!(key.get(HIGHSCORE).unwrap().as_n().unwrap(), "100");
    }
}
