//! Calculation logic for the Attendance Engine.
//!
//! This module contains the pure derivation functions (worked hours and
//! presence status) and the free-text search that runs over raw records
//! and their derived status.

mod derivation;
mod search;

pub use derivation::{
    HOURS_DECIMAL_PLACES, PRESENCE_THRESHOLD_HOURS, compute_total_hours, derive, derive_row,
    derive_rows, derive_status, parse_timestamp,
};
pub use search::{SearchTerm, search, search_rows};
