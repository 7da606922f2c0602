//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 管理门禁 (非安全边界)
//! - [`bookings`] - 客人预订流程
//! - [`reservations`] - 预订管理接口 (管理端)
//! - [`notices`] - 应用内通知

pub mod auth;
pub mod bookings;
pub mod health;
pub mod notices;
pub mod reservations;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Assemble the full application router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(bookings::router())
        .merge(reservations::router())
        .merge(notices::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
