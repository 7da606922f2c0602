//! Reservation filtering and ordering for the dashboard

use shared::models::{Area, Reservation};

/// Filter parameters, combined with logical AND in this order: exact date,
/// case-insensitive name substring, exact area.
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    pub date: Option<String>,
    pub search: Option<String>,
    pub area: Option<Area>,
}

impl ReservationFilter {
    pub fn matches(&self, reservation: &Reservation) -> bool {
        if let Some(date) = &self.date
            && reservation.date != *date
        {
            return false;
        }
        if let Some(search) = &self.search
            && !reservation
                .name
                .to_lowercase()
                .contains(&search.to_lowercase())
        {
            return false;
        }
        if let Some(area) = self.area
            && reservation.area != area
        {
            return false;
        }
        true
    }

    /// Filtered view, sorted ascending by (date, time). Lexicographic
    /// comparison is enough for fixed-width ISO dates and `HH:MM` times.
    pub fn apply(&self, reservations: &[Reservation]) -> Vec<Reservation> {
        let mut result: Vec<Reservation> = reservations
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();
        result.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
        result
    }
}
