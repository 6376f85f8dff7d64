//! Leaderboard handlers.

use axum::{extract::State, Json};

use gamefeed_core::score::{DeleteScoreRequest, PostScoreRequest, ScoreEntry};
use gamefeed_core::status::MessageResponse;

use super::{extract::Payload, AppError};
use crate::state::AppState;

/// Post a score (POST /score/postScore/).
pub async fn post_score(
    State(state): State<AppState>,
    Payload(request): Payload<PostScoreRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let entry = state.scores.post_score(request).await?;

    Ok(Json(MessageResponse::new(format!(
        "Posted score {} for {}",
        entry.highscore, entry.name
    ))))
}

/// Get the top scores (GET /score/getScores/).
pub async fn get_scores(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScoreEntry>>, AppError> {
    let scores = state.scores.top_scores().await?;
    Ok(Json(scores))
}

/// Delete a score held by the named player (POST /score/deleteScore/).
pub async fn delete_score(
    State(state): State<AppState>,
    Payload(request): Payload<DeleteScoreRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let entry = state.scores.delete_score(request).await?;

    Ok(Json(MessageResponse::new(format!(
        "Deleted score {} for {}",
        entry.highscore, entry.name
    ))))
}
