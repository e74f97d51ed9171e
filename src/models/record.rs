//! Attendance record model.
//!
//! This module defines the raw [`AttendanceRecord`] supplied by the host
//! environment and the [`EmployeeId`] it carries.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An employee identifier, numeric or textual.
///
/// Identifiers are always compared as text, so `7` and `"7"` render and
/// search identically. Any JSON value is accepted: integral numbers
/// (including `7.0`) become [`EmployeeId::Number`], everything else keeps
/// its text form, with `null` as empty text.
///
/// # Examples
///
/// ```
/// use attendance_engine::models::EmployeeId;
///
/// assert_eq!(EmployeeId::from(7).to_string(), "7");
/// assert_eq!(EmployeeId::from("EMP-7").to_string(), "EMP-7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum EmployeeId {
    /// A numeric identifier as sent by the host.
    Number(i64),
    /// A textual identifier.
    Text(String),
}

/// Largest magnitude at which every integral `f64` is exact.
const MAX_EXACT_FLOAT_INTEGER: f64 = 9_007_199_254_740_991.0;

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(number) => match number.as_i64() {
                Some(n) => EmployeeId::Number(n),
                None => match number.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT_INTEGER => {
                        EmployeeId::Number(f as i64)
                    }
                    _ => EmployeeId::Text(number.to_string()),
                },
            },
            Value::String(text) => EmployeeId::Text(text),
            Value::Null => EmployeeId::Text(String::new()),
            other => EmployeeId::Text(other.to_string()),
        })
    }
}

/// Reads a timestamp field from any JSON value.
///
/// Strings are kept verbatim, `null` becomes empty text, and any other value
/// keeps its JSON text. Whatever does not parse as a timestamp later derives
/// as unparseable instead of rejecting the record set.
fn timestamp_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeId::Number(n) => write!(f, "{}", n),
            EmployeeId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EmployeeId {
    fn from(n: i64) -> Self {
        EmployeeId::Number(n)
    }
}

impl From<&str> for EmployeeId {
    fn from(s: &str) -> Self {
        EmployeeId::Text(s.to_string())
    }
}

impl From<String> for EmployeeId {
    fn from(s: String) -> Self {
        EmployeeId::Text(s)
    }
}

/// One employee's raw clock-in/clock-out entry.
///
/// Records are immutable input: derived values are computed from them on
/// demand and never written back.
///
/// Timestamps are kept as the host supplied them so that they can be shown
/// and exported verbatim. A missing or `null` timestamp deserializes as
/// empty text, which the derivation engine reports as unparseable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// The employing organization.
    pub company: String,
    /// The employee display name.
    pub name: String,
    /// The employee identifier.
    pub id: EmployeeId,
    /// Clock-in timestamp text.
    #[serde(default, deserialize_with = "timestamp_text")]
    pub clock_in: String,
    /// Clock-out timestamp text.
    #[serde(default, deserialize_with = "timestamp_text")]
    pub clock_out: String,
}

impl AttendanceRecord {
    /// Creates a record from its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::AttendanceRecord;
    ///
    /// let record = AttendanceRecord::new(
    ///     "Acme",
    ///     "Jane Doe",
    ///     7,
    ///     "2024-01-01T08:00:00",
    ///     "2024-01-01T17:30:00",
    /// );
    /// assert_eq!(record.id.to_string(), "7");
    /// ```
    pub fn new(
        company: impl Into<String>,
        name: impl Into<String>,
        id: impl Into<EmployeeId>,
        clock_in: impl Into<String>,
        clock_out: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            name: name.into(),
            id: id.into(),
            clock_in: clock_in.into(),
            clock_out: clock_out.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_record_with_numeric_id() {
        let json = r#"{
            "company": "Acme",
            "name": "Jane Doe",
            "id": 7,
            "clockIn": "2024-01-01T08:00:00",
            "clockOut": "2024-01-01T17:30:00"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.company, "Acme");
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.id, EmployeeId::Number(7));
        assert_eq!(record.clock_in, "2024-01-01T08:00:00");
        assert_eq!(record.clock_out, "2024-01-01T17:30:00");
    }

    #[test]
    fn test_deserialize_record_with_text_id() {
        let json = r#"{
            "company": "Globex",
            "name": "John Roe",
            "id": "EMP-0042",
            "clockIn": "2024-01-01T08:00:00",
            "clockOut": "2024-01-01T16:00:00"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, EmployeeId::Text("EMP-0042".to_string()));
    }

    #[test]
    fn test_missing_timestamps_default_to_empty() {
        let json = r#"{"company": "Acme", "name": "Jane Doe", "id": 7}"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert!(record.clock_in.is_empty());
        assert!(record.clock_out.is_empty());
    }

    #[test]
    fn test_null_timestamps_default_to_empty() {
        let json = r#"{"company": "Acme", "name": "Jane Doe", "id": 7, "clockIn": "2024-01-01T08:00:00", "clockOut": null}"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.clock_in, "2024-01-01T08:00:00");
        assert!(record.clock_out.is_empty());
    }

    #[test]
    fn test_non_string_timestamps_keep_their_text() {
        let json = r#"{"company": "Acme", "name": "Jane Doe", "id": 7, "clockIn": 1704096000000, "clockOut": true}"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.clock_in, "1704096000000");
        assert_eq!(record.clock_out, "true");
    }

    #[test]
    fn test_integral_float_id_is_numeric() {
        let json = r#"{"company": "Acme", "name": "Jane Doe", "id": 7.0}"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, EmployeeId::Number(7));
        assert_eq!(record.id.to_string(), "7");
    }

    #[test]
    fn test_out_of_range_and_fractional_ids_keep_their_text() {
        let huge: AttendanceRecord = serde_json::from_str(
            r#"{"company": "Acme", "name": "Jane Doe", "id": 18446744073709551615}"#,
        )
        .unwrap();
        assert_eq!(huge.id, EmployeeId::Text("18446744073709551615".to_string()));

        let fractional: AttendanceRecord =
            serde_json::from_str(r#"{"company": "Acme", "name": "Jane Doe", "id": 7.5}"#).unwrap();
        assert_eq!(fractional.id, EmployeeId::Text("7.5".to_string()));
    }

    #[test]
    fn test_null_id_is_empty_text() {
        let record: AttendanceRecord =
            serde_json::from_str(r#"{"company": "Acme", "name": "Jane Doe", "id": null}"#).unwrap();
        assert_eq!(record.id, EmployeeId::Text(String::new()));
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let json = r#"{"company": "Acme", "id": 7}"#;

        let result: Result<AttendanceRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("missing field"));
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let record = AttendanceRecord::new(
            "Acme",
            "Jane Doe",
            7,
            "2024-01-01T08:00:00",
            "2024-01-01T17:30:00",
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["clockIn"], "2024-01-01T08:00:00");
        assert_eq!(json["clockOut"], "2024-01-01T17:30:00");
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn test_employee_id_display() {
        assert_eq!(EmployeeId::from(42).to_string(), "42");
        assert_eq!(EmployeeId::from(-3).to_string(), "-3");
        assert_eq!(EmployeeId::from("A-1".to_string()).to_string(), "A-1");
    }
}
