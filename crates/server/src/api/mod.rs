//! HTTP API.

pub mod categories;
pub mod error;
pub mod format;
pub mod questions;
pub mod quizzes;
pub mod state;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::{HeaderName, Method, header},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use trivia_api_types::HealthCheckResponse;

pub use categories::create_categories_router;
pub use error::ApiError;
pub use questions::create_questions_router;
pub use quizzes::create_quizzes_router;
pub use state::AppState;

const ALLOWED_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::AUTHORIZATION];
const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PATCH,
    Method::DELETE,
    Method::OPTIONS,
];

/// Full application router with CORS and request tracing.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(ALLOWED_HEADERS)
        .allow_methods(ALLOWED_METHODS);

    Router::new()
        .route("/health", get(health))
        .merge(create_categories_router())
        .merge(create_questions_router())
        .merge(create_quizzes_router())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::ok())
}

async fn not_found() -> ApiError {
    ApiError::NotFound("no such route".to_string())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
