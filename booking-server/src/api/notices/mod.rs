//! 应用内通知路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/notices | GET | 当前激活的通知 (过期的自动清除) |
//! | /api/notices/dismiss | POST | 手动关闭 |

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::core::ServerState;
use crate::notice::Notice;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/notices", get(current))
        .route("/api/notices/dismiss", post(dismiss))
}

/// 当前通知 (没有则为 null)
pub async fn current(State(state): State<ServerState>) -> Json<Option<Notice>> {
    Json(state.notices.current())
}

/// 关闭当前通知
pub async fn dismiss(State(state): State<ServerState>) -> Json<bool> {
    state.notices.dismiss();
    Json(true)
}
