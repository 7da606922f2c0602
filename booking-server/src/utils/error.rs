//! 统一错误处理
//!
//! 提供 API 层错误类型和响应结构。
//!
//! # 错误码规范
//!
//! | 错误码 | 分类 | HTTP |
//! |--------|------|------|
//! | E0001 | 无效请求 | 400 |
//! | E0002 | 验证失败 | 400 |
//! | E0003 | 资源不存在 | 404 |
//! | E9001 | 内部错误 | 500 |
//! | E9002 | 存储错误 | 500 |
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("Reservation not found"))
//!
//! // 返回成功响应
//! Ok(Json(data))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// 错误响应体
///
/// ```json
/// {
///   "code": "E0002",
///   "message": "name must not be empty"
/// }
/// ```
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// 错误码
    code: String,
    /// 消息
    message: String,
}

/// 应用错误枚举
///
/// 订位服务只涉及业务逻辑和系统两类错误；门禁口令错误走
/// [`AppError::Invalid`] (它不是认证失败，只是 UI 门禁的字段级提示)。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 业务逻辑错误 (4xx) ==========
    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("Invalid request: {0}")]
    /// 无效请求 (400)
    Invalid(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Storage error: {0}")]
    /// 存储错误 (500)
    Storage(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        AppError::Invalid(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        AppError::Storage(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Not found (404)
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.as_str()),

            // Validation (400)
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.as_str()),

            // Invalid request (400)
            AppError::Invalid(msg) => (StatusCode::BAD_REQUEST, "E0001", msg.as_str()),

            // Storage errors (500)
            AppError::Storage(msg) => {
                error!(target: "storage", error = %msg, "Storage error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9002", "Storage error")
            }

            // Internal errors (500)
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error",
                )
            }
        };

        let body = ErrorBody {
            code: code.to_string(),
            message: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// API 处理器的 Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
