//! Domain models

pub mod reservation;

pub use reservation::*;
