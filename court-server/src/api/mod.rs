//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`catalog`] - 餐厅目录接口
//! - [`session`] - 登录/登出接口
//! - [`cart`] - 购物车接口
//! - [`orders`] - 订单接口（顾客下单 + 摊位管理）
//! - [`rewards`] - 奖励计数接口
//! - [`recommendations`] - AI 推荐接口

pub mod cart;
pub mod catalog;
pub mod health;
pub mod orders;
pub mod recommendations;
pub mod rewards;
pub mod session;

use crate::core::ServerState;
use axum::Router;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResponse, AppResult};

/// All resource routers merged
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(catalog::router())
        .merge(session::router())
        .merge(cart::router())
        .merge(orders::router())
        .merge(rewards::router())
        .merge(recommendations::router())
}
