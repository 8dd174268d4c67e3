//! 奖励计数路由

use axum::{Json, Router, extract::State, routing::get};

use crate::api::{AppResponse, AppResult};
use crate::core::ServerState;
use crate::orders::RewardSummary;

pub fn router() -> Router<ServerState> {
    Router::new().route("/rewards", get(rewards))
}

async fn rewards(State(state): State<ServerState>) -> AppResult<RewardSummary> {
    Ok(Json(AppResponse::success(state.manager.rewards())))
}
