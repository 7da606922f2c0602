//! Reservation admin handlers
//!
//! The dashboard reads and mutates the collection here; creation only
//! happens through the booking flow. Mutations on unknown ids answer
//! `false` instead of erroring — the collection simply stays as it was.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{Area, Reservation, ReservationStatus};

use crate::admin::{DashboardStats, ReservationFilter};
use crate::core::ServerState;
use crate::notice::{Notice, NoticeKind};
use crate::utils::time;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub date: Option<String>,
    pub search: Option<String>,
    /// Area label, or "all"
    pub area: Option<String>,
}

impl ListQuery {
    fn into_filter(self) -> AppResult<ReservationFilter> {
        let area = match self.area.as_deref() {
            None | Some("") | Some("all") => None,
            Some(label) => Some(
                label
                    .parse::<Area>()
                    .map_err(|_| AppError::validation(format!("Unknown area: {label}")))?,
            ),
        };
        Ok(ReservationFilter {
            date: self.date.filter(|d| !d.is_empty()),
            search: self.search.filter(|s| !s.is_empty()),
            area,
        })
    }
}

/// GET /api/reservations - 过滤后按 (date, time) 排序的预订列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Reservation>>> {
    let filter = query.into_filter()?;
    Ok(Json(filter.apply(&state.store.list())))
}

/// GET /api/reservations/stats - 仪表盘统计
pub async fn stats(State(state): State<ServerState>) -> Json<DashboardStats> {
    Json(DashboardStats::compute(
        &state.store.list(),
        &time::today_string(),
    ))
}

/// GET /api/reservations/:id - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    state
        .store
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", id)))
}

/// PUT /api/reservations/:id - 提交编辑后的完整记录
///
/// The admin client keeps its scratch buffer locally; "save" lands here.
/// Unknown ids are a silent no-op, never an upsert.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(mut payload): Json<Reservation>,
) -> Json<bool> {
    // the path, not the body, names the target
    payload.id = id;
    Json(state.store.update(payload))
}

/// DELETE /api/reservations/:id - 删除预订 (立即执行，无确认步骤)
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Json<bool> {
    Json(state.store.delete(&id))
}

/// POST /api/reservations/:id/seat - 平面图视图的快捷入座
///
/// Sets the status straight to Seated, bypassing the full edit protocol.
pub async fn seat(State(state): State<ServerState>, Path(id): Path<String>) -> Json<bool> {
    let seated = match state.store.get(&id) {
        Some(mut reservation) => {
            reservation.status = ReservationStatus::Seated;
            state.store.update(reservation)
        }
        None => false,
    };
    Json(seated)
}

/// POST /api/reservations/:id/cancel - 外部取消信号
///
/// Marks the reservation Cancelled without removing it and raises the
/// cancellation notice. Unknown ids are ignored.
pub async fn cancel(State(state): State<ServerState>, Path(id): Path<String>) -> Json<bool> {
    let cancelled = state.store.cancel_by_id(&id);
    if cancelled {
        state.notices.push(Notice::new(
            NoticeKind::Cancellation,
            "Reservation cancelled",
            format!("Reservation {} was cancelled", id),
        ));
    }
    Json(cancelled)
}
