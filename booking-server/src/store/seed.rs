//! Initial example data
//!
//! Written to the durable slot the first time the service starts against an
//! empty database. Two entries are dated today so the dashboard has
//! something to show out of the box.

use shared::models::{Area, Occasion, Reservation, ReservationStatus};

use crate::utils::time::today_string;

/// Fixed set of example reservations
pub fn seed_reservations() -> Vec<Reservation> {
    let today = today_string();
    vec![
        Reservation {
            id: "1".into(),
            name: "Mario Rossi".into(),
            phone: "3331234567".into(),
            date: today.clone(),
            time: "20:00".into(),
            guests: 2,
            occasion: Occasion::RomanticDinner,
            area: Area::MainHall,
            status: ReservationStatus::Confirmed,
            notes: Some("Table by the window".into()),
            deposit_amount: 20,
            reminder_preference: None,
        },
        Reservation {
            id: "2".into(),
            name: "Giulia Bianchi".into(),
            phone: "3477654321".into(),
            date: today,
            time: "21:00".into(),
            guests: 4,
            occasion: Occasion::Birthday,
            area: Area::PanoramicTerrace,
            status: ReservationStatus::Pending,
            notes: Some("Gluten intolerance for 1 guest".into()),
            deposit_amount: 40,
            reminder_preference: None,
        },
        Reservation {
            id: "3".into(),
            name: "Luca Verdi".into(),
            phone: "3289876543".into(),
            date: "2024-08-16".into(),
            time: "19:30".into(),
            guests: 6,
            occasion: Occasion::Business,
            area: Area::PrivateRoom,
            status: ReservationStatus::Seated,
            notes: None,
            deposit_amount: 60,
            reminder_preference: None,
        },
    ]
}
