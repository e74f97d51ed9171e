//! Free-text search over attendance records.
//!
//! A record matches a term when any of its visible fields contains the term,
//! ignoring case: name, id, company, or the derived status text.

use crate::models::{AttendanceRecord, AttendanceRow, AttendanceStatus};

use super::derivation::derive;

/// A lower-cased search term, prepared once per search.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::SearchTerm;
/// use attendance_engine::models::{AttendanceRecord, AttendanceStatus};
///
/// let term = SearchTerm::new("ACME");
/// let record = AttendanceRecord::new("Acme", "Jane Doe", 7, "", "");
/// assert!(term.matches(&record, AttendanceStatus::Unknown));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    needle: String,
}

impl SearchTerm {
    /// Prepares a term for matching.
    ///
    /// The term is lower-cased but not trimmed; whitespace is part of what
    /// must match.
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    /// Returns the lower-cased term.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Returns true if the term matches every record.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns true if any visible field of the record contains the term.
    pub fn matches(&self, record: &AttendanceRecord, status: AttendanceStatus) -> bool {
        self.matches_raw_fields(record) || self.contains(status.as_str())
    }

    fn matches_raw_fields(&self, record: &AttendanceRecord) -> bool {
        self.is_empty()
            || self.contains(&record.name)
            || self.contains(&record.id.to_string())
            || self.contains(&record.company)
    }

    fn contains(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.needle)
    }
}

/// Returns the records matching `term`, in their original order.
///
/// An empty term returns every record. The input is left untouched and the
/// result is a new vector. Status is derived only for records whose raw
/// fields do not already match.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::search;
/// use attendance_engine::models::AttendanceRecord;
///
/// let records = vec![
///     AttendanceRecord::new("Acme", "Jane Doe", 7, "2024-01-01T08:00:00", "2024-01-01T17:30:00"),
///     AttendanceRecord::new("Globex", "John Roe", 8, "2024-01-01T08:00:00", "2024-01-01T16:00:00"),
/// ];
///
/// let absent = search(&records, "ABSENT");
/// assert_eq!(absent.len(), 1);
/// assert_eq!(absent[0].name, "John Roe");
///
/// assert_eq!(search(&records, "").len(), 2);
/// ```
pub fn search(records: &[AttendanceRecord], term: &str) -> Vec<AttendanceRecord> {
    let term = SearchTerm::new(term);
    records
        .iter()
        .filter(|record| {
            term.matches_raw_fields(record) || term.contains(derive(record).status.as_str())
        })
        .cloned()
        .collect()
}

/// Returns the already-derived rows matching `term`, in their original order.
///
/// Same predicate as [`search`], reusing each row's derived status instead
/// of recomputing it.
pub fn search_rows(rows: &[AttendanceRow], term: &str) -> Vec<AttendanceRow> {
    let term = SearchTerm::new(term);
    rows.iter()
        .filter(|row| term.matches(&row.record, row.derived.status))
        .cloned()
        .collect()
}
