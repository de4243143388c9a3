use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    models::{RecommendationReply, RecommendationRequest, SentimentReport},
    services::{recommendation, sentiment},
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Handler for `POST /movies/recommend`
///
/// Low similarity and an empty candidate listing both answer 200 with an
/// explanatory message; only resolution and upstream problems are errors.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationReply>> {
    let outcome =
        recommendation::recommend(state.catalog.clone(), &request.movie1, &request.movie2).await?;
    Ok(Json(outcome.into()))
}

/// Handler for `GET /movies/sentiment/{movie_name}`
pub async fn sentiment(
    State(state): State<AppState>,
    Path(movie_name): Path<String>,
) -> AppResult<Json<SentimentReport>> {
    let classifier = state.classifier.as_ref().ok_or_else(|| {
        AppError::ClassifierUnavailable(
            "Sentiment classifier failed to initialize at startup".to_string(),
        )
    })?;

    let report = sentiment::analyze(
        state.catalog.as_ref(),
        classifier.as_ref(),
        &movie_name,
        state.review_limits,
    )
    .await?;

    Ok(Json(report))
}
