use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Title autocomplete
        .route("/search", get(handlers::search_titles))
        // Recommendations
        .route("/api/recommend/:title", get(handlers::recommend))
        // Genre prediction
        .route("/api/predict-genre", post(handlers::predict_genre))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
