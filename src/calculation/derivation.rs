//! Worked hours and presence status derivation.
//!
//! This module turns a raw attendance record into its derived values: the
//! elapsed time between clock-in and clock-out expressed in hours, and the
//! presence status that follows from it.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceRow, AttendanceStatus, DerivedAttendance};

/// Hours at or above which an employee counts as present. Not configurable.
pub const PRESENCE_THRESHOLD_HOURS: Decimal = Decimal::from_parts(9, 0, 0, false, 0);

/// Number of decimal places total hours are rounded to.
pub const HOURS_DECIMAL_PLACES: u32 = 2;

const MILLIS_PER_HOUR: Decimal = Decimal::from_parts(3_600_000, 0, 0, false, 0);

/// Offset layouts RFC 3339 rejects, such as `+0200` without a colon.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Naive date-time layouts accepted in addition to RFC 3339.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses timestamp text into an absolute instant.
///
/// Values carrying an offset (`Z`, `+02:00`, `+0200`) keep that offset. Naive
/// date-times and bare dates have no offset and are all read as UTC, so the
/// difference between two naive values is their wall-clock difference.
///
/// Returns `None` when the text matches none of the accepted layouts.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::parse_timestamp;
///
/// assert!(parse_timestamp("2024-01-01T08:00:00").is_some());
/// assert!(parse_timestamp("2024-01-01T08:00:00+02:00").is_some());
/// assert!(parse_timestamp("2024-01-01T08:00:00+0200").is_some());
/// assert!(parse_timestamp("2024-01-01").is_some());
/// assert!(parse_timestamp("half past eight").is_none());
/// ```
pub fn parse_timestamp(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant);
    }

    for format in OFFSET_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(text, format) {
            return Some(instant);
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc().fixed_offset())
}

/// Computes the hours elapsed between clock-in and clock-out.
///
/// The millisecond difference is divided by 3,600,000 and rounded to two
/// decimal places, midpoints away from zero (`0.005` becomes `0.01`,
/// `-0.005` becomes `-0.01`).
///
/// A clock-out earlier than the clock-in yields negative hours; the value is
/// returned as-is for the caller to treat as a data-quality signal.
///
/// # Errors
///
/// Returns [`EngineError::UnparseableTimestamp`] naming the first field that
/// could not be parsed.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::compute_total_hours;
/// use rust_decimal::Decimal;
///
/// let hours = compute_total_hours("2024-01-01T08:00:00", "2024-01-01T17:30:00").unwrap();
/// assert_eq!(hours, Decimal::new(950, 2));
///
/// let negative = compute_total_hours("2024-01-01T09:00:00", "2024-01-01T08:00:00").unwrap();
/// assert_eq!(negative, Decimal::new(-100, 2));
///
/// assert!(compute_total_hours("garbage", "2024-01-01T08:00:00").is_err());
/// ```
pub fn compute_total_hours(clock_in: &str, clock_out: &str) -> EngineResult<Decimal> {
    let start = parse_timestamp(clock_in).ok_or_else(|| EngineError::UnparseableTimestamp {
        field: "clockIn".to_string(),
        value: clock_in.to_string(),
    })?;
    let end = parse_timestamp(clock_out).ok_or_else(|| EngineError::UnparseableTimestamp {
        field: "clockOut".to_string(),
        value: clock_out.to_string(),
    })?;

    let elapsed_millis = (end - start).num_milliseconds();
    let hours = Decimal::from(elapsed_millis) / MILLIS_PER_HOUR;

    Ok(hours.round_dp_with_strategy(HOURS_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero))
}

/// Derives the presence status from total hours.
///
/// `None` stands for unparseable input and yields
/// [`AttendanceStatus::Unknown`], never `Present` or `Absent`.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::derive_status;
/// use attendance_engine::models::AttendanceStatus;
/// use rust_decimal::Decimal;
///
/// assert_eq!(derive_status(Some(Decimal::new(9, 0))), AttendanceStatus::Present);
/// assert_eq!(derive_status(Some(Decimal::new(899, 2))), AttendanceStatus::Absent);
/// assert_eq!(derive_status(None), AttendanceStatus::Unknown);
/// ```
pub fn derive_status(total_hours: Option<Decimal>) -> AttendanceStatus {
    match total_hours {
        Some(hours) if hours >= PRESENCE_THRESHOLD_HOURS => AttendanceStatus::Present,
        Some(_) => AttendanceStatus::Absent,
        None => AttendanceStatus::Unknown,
    }
}

/// Derives total hours and status for a record.
pub fn derive(record: &AttendanceRecord) -> DerivedAttendance {
    let total_hours = compute_total_hours(&record.clock_in, &record.clock_out).ok();
    DerivedAttendance {
        total_hours,
        status: derive_status(total_hours),
    }
}

/// Pairs a record with its derivation.
pub fn derive_row(record: &AttendanceRecord) -> AttendanceRow {
    AttendanceRow {
        record: record.clone(),
        derived: derive(record),
    }
}

/// Derives every record once, preserving order.
pub fn derive_rows(records: &[AttendanceRecord]) -> Vec<AttendanceRow> {
    records.iter().map(derive_row).collect()
}
