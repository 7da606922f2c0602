//! Reservation Model
//!
//! The sole persistent entity of the booking system, plus its closed
//! enumerations. The wire format is camelCase to stay compatible with the
//! payloads the front-end already stores (`depositAmount`,
//! `reminderPreference`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Flat per-guest deposit, in euro
pub const DEPOSIT_PER_GUEST: u32 = 10;

/// Guest count limits accepted by the booking form
pub const MIN_GUESTS: u32 = 1;
pub const MAX_GUESTS: u32 = 12;

/// Deposit charged at booking time, frozen on the record afterwards
pub fn deposit_for(guests: u32) -> u32 {
    guests * DEPOSIT_PER_GUEST
}

/// Reservation lifecycle status (预订状态)
///
/// Only these five values ever reach the durable store. The front-end's
/// transient "pending_payment" state lives inside the booking flow and is
/// persisted as [`ReservationStatus::Pending`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Seated,
    Completed,
    Cancelled,
}

impl ReservationStatus {
    /// Badge color used by the admin dashboard
    pub fn color(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "yellow",
            ReservationStatus::Confirmed => "blue",
            ReservationStatus::Seated => "green",
            ReservationStatus::Completed => "gray",
            ReservationStatus::Cancelled => "red",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReservationStatus::Pending => "Pending",
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Seated => "Seated",
            ReservationStatus::Completed => "Completed",
            ReservationStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", label)
    }
}

/// Booking occasion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occasion {
    Birthday,
    #[serde(rename = "Romantic Dinner")]
    RomanticDinner,
    Anniversary,
    Business,
    #[default]
    Casual,
    Other,
}

impl Occasion {
    /// Icon shown next to the occasion in the dashboard
    pub fn icon(&self) -> &'static str {
        match self {
            Occasion::Birthday => "🎂",
            Occasion::RomanticDinner => "❤️",
            Occasion::Anniversary => "🥂",
            Occasion::Business => "💼",
            Occasion::Casual => "🍽️",
            Occasion::Other => "🍽️",
        }
    }
}

/// Seating area (区域), selected as a package with a per-guest surcharge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Area {
    #[default]
    #[serde(rename = "Main Hall")]
    MainHall,
    #[serde(rename = "Panoramic Terrace")]
    PanoramicTerrace,
    #[serde(rename = "Exclusive Private Room")]
    PrivateRoom,
}

impl Area {
    /// All selectable areas, in display order
    pub const ALL: [Area; 3] = [Area::MainHall, Area::PanoramicTerrace, Area::PrivateRoom];

    /// Per-guest package surcharge (euro)
    pub fn per_guest_surcharge(&self) -> u32 {
        match self {
            Area::MainHall => 0,
            Area::PanoramicTerrace => 20,
            Area::PrivateRoom => 50,
        }
    }

    /// Display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Area::MainHall => "Main Hall",
            Area::PanoramicTerrace => "Panoramic Terrace",
            Area::PrivateRoom => "Exclusive Private Room",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Area {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Main Hall" => Ok(Area::MainHall),
            "Panoramic Terrace" => Ok(Area::PanoramicTerrace),
            "Exclusive Private Room" => Ok(Area::PrivateRoom),
            _ => Err(()),
        }
    }
}

/// Advisory reminder preference — stored, never scheduled here
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderPreference {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "2h")]
    TwoHours,
    #[serde(rename = "3h")]
    ThreeHours,
}

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Opaque unique ID, assigned at creation, immutable
    pub id: String,
    pub name: String,
    pub phone: String,
    /// Calendar date, ISO `YYYY-MM-DD`
    pub date: String,
    /// Wall-clock time, `HH:MM`
    pub time: String,
    pub guests: u32,
    pub occasion: Occasion,
    pub area: Area,
    pub status: ReservationStatus,
    /// Allergies or special requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Frozen at creation; admin edits never recompute it
    pub deposit_amount: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_preference: Option<ReminderPreference>,
}

/// Create payload — a reservation without `id`/`status`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: u32,
    pub occasion: Occasion,
    pub area: Area,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub deposit_amount: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_preference: Option<ReminderPreference>,
}

impl ReservationDraft {
    /// Materialize into a full record with the given id and status
    pub fn into_reservation(self, id: String, status: ReservationStatus) -> Reservation {
        Reservation {
            id,
            name: self.name,
            phone: self.phone,
            date: self.date,
            time: self.time,
            guests: self.guests,
            occasion: self.occasion,
            area: self.area,
            status,
            notes: self.notes,
            deposit_amount: self.deposit_amount,
            reminder_preference: self.reminder_preference,
        }
    }
}
