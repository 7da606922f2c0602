//! Admin gate handler
//!
//! A plaintext compare against the configured admin password. This is a UI
//! deterrent only: no token is issued, nothing else is gated on it
//! server-side, and there is no lockout or rate limiting.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub granted: bool,
}

/// POST /api/auth/login - 管理视图门禁
///
/// On mismatch the client shows the field-level message and stays in the
/// prompt; on match it switches to the admin view.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if req.password != state.config.admin_password {
        tracing::warn!("Admin gate rejected a wrong password");
        return Err(AppError::invalid("Wrong password"));
    }

    Ok(Json(LoginResponse { granted: true }))
}
