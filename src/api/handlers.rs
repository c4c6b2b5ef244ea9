use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{GenrePrediction, Recommendation};
use crate::services::{genre, recommender, search};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    pub k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub movie: String,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Deserialize)]
pub struct PredictGenreRequest {
    #[serde(default)]
    pub text: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Title autocomplete over the in-memory catalog
pub async fn search_titles(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<String>> {
    let catalog = state.catalog().await;
    Json(search::search_titles(&catalog, &params.q))
}

/// Ranked similar movies for a title query
pub async fn recommend(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Query(params): Query<RecommendParams>,
) -> AppResult<Json<RecommendResponse>> {
    let catalog = state.catalog().await;
    let k = params.k.unwrap_or(recommender::DEFAULT_RECOMMENDATIONS);

    let recommendations = recommender::recommend(&catalog, &title, k)?;
    Ok(Json(RecommendResponse {
        movie: title,
        recommendations,
    }))
}

/// Genre prediction for free text
pub async fn predict_genre(
    State(state): State<AppState>,
    Json(request): Json<PredictGenreRequest>,
) -> AppResult<Json<GenrePrediction>> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(AppError::InvalidInput("No text provided".to_string()));
    }

    let catalog = state.catalog().await;
    genre::predict_genre(&catalog, text)
        .map(Json)
        .ok_or_else(|| AppError::Unavailable("Genre prediction not available".to_string()))
}
