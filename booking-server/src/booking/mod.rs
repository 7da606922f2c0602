//! Guest booking flow
//!
//! Details → PaymentConfirm → Success, with the payment redirect and the
//! optional webhook notification hanging off the confirm step.

pub mod flow;
pub mod payment;
pub mod webhook;

pub use flow::{BookingConfirmation, BookingFlow, BookingRequest, BookingStep, DepositQuote};
