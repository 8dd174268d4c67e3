//! 登录/登出路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /session | GET | 当前会话 |
//! | /session/customer | POST | 顾客登录（邮箱，无密码验证） |
//! | /session/vendor | POST | 摊位登录（选择餐厅） |
//! | /session | DELETE | 登出 |

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::Deserialize;
use validator::Validate;

use crate::api::{AppError, AppResponse, AppResult};
use crate::core::ServerState;
use crate::orders::Session;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/session", get(current_session).delete(logout))
        .route("/session/customer", post(login_customer))
        .route("/session/vendor", post(login_vendor))
}

#[derive(Debug, Deserialize, Validate)]
pub struct CustomerLoginRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct VendorLoginRequest {
    pub restaurant_id: String,
}

async fn current_session(State(state): State<ServerState>) -> AppResult<Session> {
    Ok(Json(AppResponse::success(state.manager.session())))
}

async fn login_customer(
    State(state): State<ServerState>,
    Json(req): Json<CustomerLoginRequest>,
) -> AppResult<Session> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    Ok(Json(AppResponse::success(
        state.manager.login_customer(&req.email),
    )))
}

async fn login_vendor(
    State(state): State<ServerState>,
    Json(req): Json<VendorLoginRequest>,
) -> AppResult<Session> {
    let session = state.manager.login_vendor(&req.restaurant_id)?;
    Ok(Json(AppResponse::success(session)))
}

async fn logout(State(state): State<ServerState>) -> AppResult<Session> {
    Ok(Json(AppResponse::success(state.manager.logout())))
}
