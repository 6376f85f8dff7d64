use axum::{
    handler::Handler,
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        news::{delete_news, get_news, post_news},
        root::time_active,
        score::{delete_score, get_scores, post_score},
    },
    middleware::count_requests,
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // Game clients call from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let news_routes = Router::new()
        .merge(post_route("/postNews", post_news))
        .merge(get_route("/getNews", get_news))
        .merge(post_route("/deleteNews", delete_news));

    let score_routes = Router::new()
        .merge(post_route("/postScore", post_score))
        .merge(get_route("/getScores", get_scores))
        .merge(post_route("/deleteScore", delete_score));

    // Main application router
    Router::new()
        .route("/", get(time_active))
        .route("/livez", get(livez))
        .nest("/news", news_routes)
        .nest("/score", score_routes)
        .layer(middleware::from_fn_with_state(state.clone(), count_requests))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Registers a POST handler at `path` and `path/`.
fn post_route<H, T>(path: &str, handler: H) -> Router<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    Router::new()
        .route(path, post(handler.clone()))
        .route(&format!("{path}/"), post(handler))
}

/// Registers a GET handler at `path` and `path/`.
fn get_route<H, T>(path: &str, handler: H) -> Router<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    Router::new()
        .route(path, get(handler.clone()))
        .route(&format!("{path}/"), get(handler))
}
