//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `gamefeed_core::storage`.
//! The store's own message is carried into every mapped error so the client
//! sees what DynamoDB reported.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use gamefeed_core::storage::RepositoryError;

/// The message DynamoDB attached to an operation error, or its full
/// display chain when there is none.
fn store_message<E: ProvideErrorMetadata + Error>(err: &E) -> String {
    match err.message() {
        Some(message) => message.to_string(),
        None => DisplayErrorContext(err).to_string(),
    }
}

fn with_store_message(id: String, message: Option<&str>) -> String {
    match message {
        Some(message) => format!("{id} ({message})"),
        None => id,
    }
}

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    if let SdkError::DispatchFailure(_) = &err {
        return map_connection_error(DisplayErrorContext(&err));
    }
    let err = err.into_service_error();
    let message = store_message(&err);
    match err {
        QueryError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed(format!("Table not found: {message}"))
        }
        QueryError::ProvisionedThroughputExceededException(_)
        | QueryError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed(format!("Throughput exceeded, please retry: {message}"))
        }
        QueryError::InternalServerError(_) => {
            RepositoryError::QueryFailed(format!("DynamoDB internal server error: {message}"))
        }
        _ => RepositoryError::QueryFailed(message),
    }
}

/// Map a PutItem SDK error to RepositoryError.
///
/// A failed condition means the key is already taken.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    if let SdkError::DispatchFailure(_) = &err {
        return map_connection_error(DisplayErrorContext(&err));
    }
    let err = err.into_service_error();
    let message = store_message(&err);
    match err {
        PutItemError::ConditionalCheckFailedException(e) => RepositoryError::AlreadyExists {
            entity_type,
            id: with_store_message(id.into(), e.message()),
        },
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed(format!("Table not found: {message}"))
        }
        PutItemError::ProvisionedThroughputExceededException(_)
        | PutItemError::RequestLimitExceeded(_)
        | PutItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed(format!("Write throttled, please retry: {message}"))
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed(format!("DynamoDB internal server error: {message}"))
        }
        _ => RepositoryError::QueryFailed(format!("PutItem failed: {message}")),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
///
/// A failed condition means no row with the expected attributes exists.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    if let SdkError::DispatchFailure(_) = &err {
        return map_connection_error(DisplayErrorContext(&err));
    }
    let err = err.into_service_error();
    let message = store_message(&err);
    match err {
        DeleteItemError::ConditionalCheckFailedException(e) => RepositoryError::NotFound {
            entity_type,
            id: with_store_message(id.into(), e.message()),
        },
        DeleteItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed(format!("Table not found: {message}"))
        }
        DeleteItemError::ProvisionedThroughputExceededException(_)
        | DeleteItemError::RequestLimitExceeded(_)
        | DeleteItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed(format!("Write throttled, please retry: {message}"))
        }
        DeleteItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed(format!("DynamoDB internal server error: {message}"))
        }
        _ => RepositoryError::QueryFailed(format!("DeleteItem failed: {message}")),
    }
}

/// Map a generic connection/config error to RepositoryError.
pub fn map_connection_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::ConnectionFailed(err.to_string())
}
