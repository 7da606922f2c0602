//! Best-effort booking webhook
//!
//! If a webhook URL is configured, every confirmed booking is POSTed to it
//! as JSON. The call is fully detached: failures are logged and never reach
//! the booking flow's result. Callers must not rely on delivery — this
//! non-propagation is the contract, not an accident.

use shared::models::Reservation;

/// Fire-and-forget notification. A `None` url disables the webhook entirely.
pub fn spawn_notify(url: Option<String>, reservation: Reservation) {
    let Some(url) = url else {
        return;
    };

    tokio::spawn(async move {
        let client = reqwest::Client::new();
        let response = match client.post(&url).json(&reservation).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(
                    reservation_id = %reservation.id,
                    error = %e,
                    "Booking webhook call failed"
                );
                return;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                reservation_id = %reservation.id,
                status = %response.status(),
                "Booking webhook returned non-success status"
            );
            return;
        }

        tracing::debug!(reservation_id = %reservation.id, "Booking webhook delivered");
    });
}
