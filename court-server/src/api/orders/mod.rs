//! 订单路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /orders | POST | 结账下单 |
//! | /orders | GET | 全部在场订单（最新在前） |
//! | /orders/restaurant/{id} | GET | 某摊位的在场订单 |
//! | /orders/history | GET | 顾客历史订单 |
//! | /orders/active | GET | 正在跟踪的订单 |
//! | /orders/{id}/status | PUT | 推进订单状态（线性状态机校验） |
//! | /orders/{id}/extra-time | POST | 延长备餐时间 +5 分钟 |

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use serde::Deserialize;
use shared::order::{Order, OrderStatus};

use crate::api::{AppResponse, AppResult};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/orders", post(place_order).get(list_orders))
        .route("/orders/restaurant/{id}", get(list_restaurant_orders))
        .route("/orders/history", get(order_history))
        .route("/orders/active", get(active_order))
        .route("/orders/{id}/status", put(update_status))
        .route("/orders/{id}/extra-time", post(add_extra_time))
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

async fn place_order(State(state): State<ServerState>) -> AppResult<Order> {
    let order = state.manager.place_order()?;
    Ok(Json(AppResponse::success(order)))
}

async fn list_orders(State(state): State<ServerState>) -> AppResult<Vec<Order>> {
    Ok(Json(AppResponse::success(state.manager.orders())))
}

async fn list_restaurant_orders(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Vec<Order>> {
    Ok(Json(AppResponse::success(
        state.manager.orders_for_restaurant(&id),
    )))
}

async fn order_history(State(state): State<ServerState>) -> AppResult<Vec<Order>> {
    Ok(Json(AppResponse::success(
        state.manager.customer_order_history(),
    )))
}

async fn active_order(State(state): State<ServerState>) -> AppResult<Option<Order>> {
    Ok(Json(AppResponse::success(
        state.manager.active_customer_order(),
    )))
}

async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> AppResult<()> {
    state.manager.update_order_status(&id, req.status)?;
    Ok(Json(AppResponse::success(())))
}

async fn add_extra_time(State(state): State<ServerState>, Path(id): Path<String>) -> AppResult<()> {
    state.manager.add_time_to_order(&id)?;
    Ok(Json(AppResponse::success(())))
}
