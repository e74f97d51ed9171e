//! Request types for the Attendance Engine API.
//!
//! This module defines the JSON request body shared by the
//! `/attendance/search` and `/attendance/export` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::AttendanceRecord;

/// Request body for the search and export endpoints.
///
/// Both fields are optional: missing `records` (or `null`) is the empty
/// set, and a missing or `null` `term` is the empty term that matches
/// everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The full ordered record set, re-supplied wholesale on every call.
    #[serde(default)]
    pub records: Option<Vec<AttendanceRecord>>,
    /// The free-text search term.
    #[serde(default)]
    pub term: Option<String>,
}
