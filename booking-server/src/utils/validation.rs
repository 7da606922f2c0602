//! Input validation helpers
//!
//! Centralized text length constants and validation functions. Limits are
//! chosen for reasonable front-desk UX; the store itself enforces nothing
//! beyond them.

use shared::models::{MAX_GUESTS, MIN_GUESTS};

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Guest names
pub const MAX_NAME_LEN: usize = 200;

/// Notes, allergies, special requests
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate the guest count accepted by the booking form (1–12).
pub fn validate_guest_count(guests: u32) -> Result<(), AppError> {
    if !(MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
        return Err(AppError::validation(format!(
            "guests must be between {MIN_GUESTS} and {MAX_GUESTS} (got {guests})"
        )));
    }
    Ok(())
}

/// Validate a `HH:MM` wall-clock time string.
pub fn validate_time(value: &str) -> Result<(), AppError> {
    chrono::NaiveTime::parse_from_str(value, "%H:%M")
        .map(|_| ())
        .map_err(|_| AppError::validation(format!("Invalid time format: {value}")))
}
