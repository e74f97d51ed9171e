//! Core data models for the Attendance Engine.
//!
//! This module contains the raw attendance record supplied by the host and
//! the derived values computed from it.

mod derived;
mod record;

pub use derived::{AttendanceRow, AttendanceStatus, DerivedAttendance, StatusAccent};
pub use record::{AttendanceRecord, EmployeeId};
