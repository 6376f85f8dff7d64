//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the repository traits
//! using `aws-sdk-dynamodb`. News and scores live in two tables, each keyed by
//! a `Service` partition key and a numeric sort key.

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::{DynamoDbRepository, TableNames};
