//! Guest booking handlers
//!
//! Both endpoints drive the [`BookingFlow`] state machine; the difference is
//! how far they take it.

use axum::{Json, extract::State};

use crate::booking::{BookingConfirmation, BookingFlow, BookingRequest, DepositQuote};
use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/bookings/quote - 校验表单并预览定金
///
/// Runs the Details → PaymentConfirm transition only; nothing is stored.
pub async fn quote(Json(payload): Json<BookingRequest>) -> AppResult<Json<DepositQuote>> {
    let mut flow = BookingFlow::new();
    let quote = flow.submit_details(payload)?;
    Ok(Json(quote))
}

/// POST /api/bookings - 提交预订
///
/// Runs the whole flow through confirmation: validates, stores the Pending
/// reservation, fires the webhook (best effort) and returns the payment
/// link for the client to open in a new tab.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingRequest>,
) -> AppResult<Json<BookingConfirmation>> {
    let mut flow = BookingFlow::new();
    flow.submit_details(payload)?;
    let confirmation = flow.confirm(&state.store, &state.notices, &state.config)?;

    tracing::info!(
        reservation_id = %confirmation.reservation_id,
        deposit = confirmation.deposit_amount,
        "Booking confirmed"
    );

    Ok(Json(confirmation))
}
