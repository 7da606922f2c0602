//! External payment link construction
//!
//! The deposit is paid on an external page; this only appends the amount to
//! the configured base link. Payment completion is never verified.

/// Append the deposit as an `amount` query parameter
pub fn payment_link(base: &str, amount: u32) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}amount={amount}")
}
