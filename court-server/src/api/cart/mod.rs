//! 购物车路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /cart | GET | 当前购物车 |
//! | /cart/items | POST | 加入一份菜品 |
//! | /cart/items/{item_id} | PUT | 修改数量（<= 0 删除） |
//! | /cart | DELETE | 清空购物车 |

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use serde::Deserialize;
use shared::order::Cart;

use crate::api::{AppError, AppResponse, AppResult};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/cart", get(current_cart).delete(clear_cart))
        .route("/cart/items", post(add_item))
        .route("/cart/items/{item_id}", put(update_quantity))
}

#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub restaurant_id: String,
    pub item_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i32,
}

async fn current_cart(State(state): State<ServerState>) -> AppResult<Cart> {
    Ok(Json(AppResponse::success(state.manager.cart())))
}

/// Resolve the ids against the catalog, then hand the manager the
/// resolved reference data (the in-memory operation itself never fails)
async fn add_item(
    State(state): State<ServerState>,
    Json(req): Json<AddToCartRequest>,
) -> AppResult<Cart> {
    let restaurant = state
        .catalog
        .restaurant(&req.restaurant_id)
        .ok_or_else(|| AppError::not_found(format!("Restaurant not found: {}", req.restaurant_id)))?;
    let item = restaurant
        .menu_item(&req.item_id)
        .ok_or_else(|| AppError::not_found(format!("Menu item not found: {}", req.item_id)))?;
    Ok(Json(AppResponse::success(
        state.manager.add_to_cart(item, restaurant),
    )))
}

async fn update_quantity(
    State(state): State<ServerState>,
    Path(item_id): Path<String>,
    Json(req): Json<UpdateQuantityRequest>,
) -> AppResult<Cart> {
    Ok(Json(AppResponse::success(
        state.manager.update_cart_quantity(&item_id, req.quantity),
    )))
}

async fn clear_cart(State(state): State<ServerState>) -> AppResult<Cart> {
    Ok(Json(AppResponse::success(state.manager.clear_cart())))
}
