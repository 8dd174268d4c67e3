//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - [`AppResponse`] - API 响应结构
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("Restaurant not found"))
//!
//! // 返回成功响应
//! Ok(Json(AppResponse::success(data)))
//! ```

use crate::orders::{OrderError, PlaceOrderError, SessionError};
use crate::services::{CatalogError, RecommendError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// API 统一响应结构
///
/// ```json
/// {
///   "code": "0000",
///   "message": "success",
///   "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// 错误码 (0000 表示成功)
    pub code: String,
    /// 消息
    pub message: String,
    /// 响应数据
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> AppResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: "0000".to_string(),
            message: "success".to_string(),
            data: Some(data),
        }
    }
}

/// Handler result type
pub type AppResult<T> = Result<Json<AppResponse<T>>, AppError>;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 业务逻辑错误 (4xx) ==========
    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("Business rule violation: {0}")]
    /// 业务规则违反 (422)
    BusinessRule(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Upstream service error: {0}")]
    /// 上游服务错误 (502)
    Upstream(String),

    #[error("Service unavailable: {0}")]
    /// 服务不可用 (503)
    Unavailable(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "E0003"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "E0002"),
            AppError::BusinessRule(_) => (StatusCode::UNPROCESSABLE_ENTITY, "E0005"),
            AppError::Upstream(_) => (StatusCode::BAD_GATEWAY, "E0102"),
            AppError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "E0103"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "E0001"),
        };

        if status.is_server_error() {
            error!(code, error = %self, "Request failed");
        }

        let body = AppResponse::<()> {
            code: code.to_string(),
            message: self.to_string(),
            data: None,
        };
        (status, Json(body)).into_response()
    }
}

// ========== 领域错误转换 ==========

impl From<PlaceOrderError> for AppError {
    fn from(err: PlaceOrderError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::UnknownRestaurant(_) => Self::NotFound(err.to_string()),
        }
    }
}

impl From<RecommendError> for AppError {
    fn from(err: RecommendError) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        Self::Internal(err.to_string())
    }
}
