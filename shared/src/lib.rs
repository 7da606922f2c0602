//! Shared types for the Oro Nero reservation system
//!
//! Domain models, reservation ID generation and utility types used by the
//! booking server (and by any future client crates).

pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
