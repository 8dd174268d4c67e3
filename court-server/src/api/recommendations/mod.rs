//! AI 推荐路由
//!
//! The recommendation call is the only outbound network dependency; a
//! failure is reported as a recoverable message and never touches
//! cart/order state.

use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;
use validator::Validate;

use crate::api::{AppError, AppResponse, AppResult};
use crate::core::ServerState;
use crate::services::{ResolvedRecommendation, resolve_recommendations};

pub fn router() -> Router<ServerState> {
    Router::new().route("/recommendations", post(recommend))
}

#[derive(Debug, Deserialize, Validate)]
pub struct RecommendRequest {
    /// Natural-language request, e.g. "something spicy under 200"
    #[validate(length(min = 1, message = "query must not be empty"))]
    pub query: String,
}

async fn recommend(
    State(state): State<ServerState>,
    Json(req): Json<RecommendRequest>,
) -> AppResult<Vec<ResolvedRecommendation>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let recommender = state
        .recommender
        .clone()
        .ok_or_else(|| AppError::Unavailable("Recommendation service not configured".into()))?;

    let view = state.catalog.view();
    let triples = recommender.recommend(&req.query, &view).await?;
    let resolved = resolve_recommendations(triples, &state.catalog);

    tracing::info!(
        requested = %req.query,
        resolved = resolved.len(),
        "Recommendations served"
    );
    Ok(Json(AppResponse::success(resolved)))
}
