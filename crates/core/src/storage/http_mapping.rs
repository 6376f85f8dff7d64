//! HTTP status codes for repository failures.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to the HTTP status code reported to clients.
///
/// - `NotFound` -> 404: a conditional delete found no matching row, e.g. a
///   score held by someone other than the named player
/// - `AlreadyExists` -> 409: every attempt to claim a post ID lost a race
/// - `ConnectionFailed` -> 503: the store could not be reached
/// - `QueryFailed` -> 500: the store rejected or failed the request
/// - `InvalidData` -> 500: a stored row could not be decoded
///
/// # Examples
///
/// ```
/// use gamefeed_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "ScoreEntry",
///     id: "VERSION1/100 held by Alice".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) | RepositoryError::InvalidData(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_held_by_another_player_is_404() {
        let error = RepositoryError::NotFound {
            entity_type: "ScoreEntry",
            id: "VERSION1/100 held by Alice (The conditional request failed)".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_exhausted_post_id_allocation_is_409() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "NewsPost",
            id: "VERSION1/7".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 409);
    }

    #[test]
    fn test_unreachable_store_is_503() {
        let error = RepositoryError::ConnectionFailed("dispatch failure: connection refused".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_missing_table_is_500() {
        let error = RepositoryError::QueryFailed(
            "Table not found: Requested resource not found".to_string(),
        );
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_corrupt_stored_row_is_server_error() {
        let error = RepositoryError::InvalidData("Missing or invalid field: Highscore".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }
}
