//! Uptime report at the root path.

use axum::{extract::State, Json};

use gamefeed_core::status::{format_uptime, UptimeResponse};

use crate::state::AppState;

/// Handler for GET /
pub async fn time_active(State(state): State<AppState>) -> Json<UptimeResponse> {
    Json(UptimeResponse {
        time_active: format_uptime(&state.service_name, state.uptime()),
    })
}
