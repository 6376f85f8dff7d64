//! Request counting.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Counts every request and records the running total in its trace.
pub async fn count_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let count = state.record_request();
    tracing::debug!(
        request_count = count,
        method = %request.method(),
        path = %request.uri().path(),
        "Handling request"
    );
    next.run(request).await
}
