//! 餐厅目录路由
//!
//! Read-only reference data; the catalog never changes after startup.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use shared::models::Restaurant;

use crate::api::{AppError, AppResponse, AppResult};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/catalog/restaurants", get(list_restaurants))
        .route("/catalog/restaurants/{id}", get(get_restaurant))
}

async fn list_restaurants(State(state): State<ServerState>) -> AppResult<Vec<Restaurant>> {
    Ok(Json(AppResponse::success(
        state.catalog.restaurants().to_vec(),
    )))
}

async fn get_restaurant(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Restaurant> {
    let restaurant = state
        .catalog
        .restaurant(&id)
        .ok_or_else(|| AppError::not_found(format!("Restaurant not found: {id}")))?;
    Ok(Json(AppResponse::success(restaurant.clone())))
}
