//! Derived attendance values.
//!
//! This module contains the values computed from a raw record: the worked
//! hours, the presence status, and the accent the presentation layer keys
//! its colors off.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AttendanceRecord;

/// Text shown in place of total hours when a timestamp is unparseable.
const UNPARSEABLE_HOURS_TEXT: &str = "N/A";

/// The presence status derived from worked hours.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceStatus;
///
/// assert_eq!(AttendanceStatus::Present.to_string(), "Present");
/// assert_eq!(AttendanceStatus::Unknown.as_str(), "Unknown");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    /// Worked hours reached the presence threshold.
    Present,
    /// Worked hours are below the threshold (including negative durations).
    Absent,
    /// Worked hours could not be computed because a timestamp is unparseable.
    Unknown,
}

impl AttendanceStatus {
    /// Returns the display text of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Unknown => "Unknown",
        }
    }

    /// Returns the visual accent for the status.
    ///
    /// Only `Present` is positive; every other status is negative.
    pub fn accent(&self) -> StatusAccent {
        match self {
            AttendanceStatus::Present => StatusAccent::Positive,
            AttendanceStatus::Absent | AttendanceStatus::Unknown => StatusAccent::Negative,
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The visual accent paired with a status (green/red in the default theme).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusAccent {
    /// Rendered in the positive color.
    Positive,
    /// Rendered in the negative color.
    Negative,
}

/// Values derived from one record for one recompute cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedAttendance {
    /// Worked hours rounded to two decimal places, or `None` when a
    /// timestamp could not be parsed.
    pub total_hours: Option<Decimal>,
    /// The presence status.
    pub status: AttendanceStatus,
}

impl DerivedAttendance {
    /// Returns total hours as two-decimal text, or `N/A` when unparseable.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{AttendanceStatus, DerivedAttendance};
    /// use rust_decimal::Decimal;
    ///
    /// let derived = DerivedAttendance {
    ///     total_hours: Some(Decimal::new(8, 0)),
    ///     status: AttendanceStatus::Absent,
    /// };
    /// assert_eq!(derived.total_hours_text(), "8.00");
    /// ```
    pub fn total_hours_text(&self) -> String {
        match self.total_hours {
            Some(hours) => format!("{:.2}", hours),
            None => UNPARSEABLE_HOURS_TEXT.to_string(),
        }
    }
}

/// A record paired with its derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRow {
    /// The raw record.
    pub record: AttendanceRecord,
    /// Values derived from the record.
    pub derived: DerivedAttendance,
}
