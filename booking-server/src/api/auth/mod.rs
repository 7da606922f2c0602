//! Admin gate API 模块
//!
//! 明文口令比对，只是 UI 层的门禁，不是安全边界。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/login", post(handler::login))
}
