//! Dashboard statistics

use serde::Serialize;
use shared::models::{Reservation, ReservationStatus};

/// Headline numbers over the current collection, recomputed per request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Guests expected today (Cancelled excluded)
    pub covers_today: u32,
    /// Pending requests across all dates
    pub pending: u32,
    /// Today's reservations currently seated
    pub active_tables: u32,
}

impl DashboardStats {
    /// Pure function of the collection and today's date
    pub fn compute(reservations: &[Reservation], today: &str) -> Self {
        let mut covers_today = 0;
        let mut pending = 0;
        let mut active_tables = 0;

        for reservation in reservations {
            if reservation.status == ReservationStatus::Pending {
                pending += 1;
            }
            if reservation.date == today {
                if reservation.status != ReservationStatus::Cancelled {
                    covers_today += reservation.guests;
                }
                if reservation.status == ReservationStatus::Seated {
                    active_tables += 1;
                }
            }
        }

        Self {
            covers_today,
            pending,
            active_tables,
        }
    }
}
