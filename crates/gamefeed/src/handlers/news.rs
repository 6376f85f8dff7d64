//! News feed handlers.

use axum::{extract::State, Json};

use gamefeed_core::news::{DeleteNewsRequest, NewsPost, PostNewsRequest};
use gamefeed_core::status::MessageResponse;

use super::{extract::Payload, AppError};
use crate::state::AppState;

/// Create a news post (POST /news/postNews/).
pub async fn post_news(
    State(state): State<AppState>,
    Payload(request): Payload<PostNewsRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let post = state.news.post_news(request).await?;

    Ok(Json(MessageResponse::new(format!(
        "Posted news {} for {}",
        post.post_id, post.service
    ))))
}

/// List the news feed, newest first (GET /news/getNews/).
pub async fn get_news(State(state): State<AppState>) -> Result<Json<Vec<NewsPost>>, AppError> {
    let posts = state.news.list_news().await?;
    Ok(Json(posts))
}

/// Delete a news post (POST /news/deleteNews/).
pub async fn delete_news(
    State(state): State<AppState>,
    Payload(request): Payload<DeleteNewsRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let key = state.news.delete_news(request).await?;

    Ok(Json(MessageResponse::new(format!(
        "Deleted news {} for {}",
        key.post_id, key.service
    ))))
}
