//! The attendance view pipeline.
//!
//! [`AttendanceView`] replaces UI re-render reactivity with an explicit
//! pipeline: raw records are derived once per recompute, filtered by the
//! current search term, and exposed through a pull accessor. A recompute runs
//! whenever the record set or the term changes.

use std::sync::Arc;

use tracing::debug;

use crate::calculation::{derive_rows, search_rows};
use crate::config::ReportConfig;
use crate::export::ExportDocument;
use crate::models::{AttendanceRecord, AttendanceRow};

/// A searchable, exportable view over one snapshot of attendance records.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceRecord, AttendanceStatus};
/// use attendance_engine::view::AttendanceView;
///
/// let mut view = AttendanceView::new();
/// view.load(Some(vec![
///     AttendanceRecord::new("Acme", "Jane Doe", 7, "2024-01-01T08:00:00", "2024-01-01T17:30:00"),
///     AttendanceRecord::new("Acme", "John Roe", 8, "2024-01-01T08:00:00", "2024-01-01T16:00:00"),
/// ]));
///
/// view.set_search_term("present");
/// assert_eq!(view.rows().len(), 1);
/// assert_eq!(view.rows()[0].derived.status, AttendanceStatus::Present);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttendanceView {
    records: Arc<[AttendanceRecord]>,
    term: String,
    rows: Vec<AttendanceRow>,
}

impl AttendanceView {
    /// Creates an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a view over `records` with an empty search term.
    pub fn with_records(records: Vec<AttendanceRecord>) -> Self {
        let mut view = Self::new();
        view.load(Some(records));
        view
    }

    /// Replaces the record snapshot and recomputes.
    ///
    /// A record set that is absent or not yet loaded is treated as empty.
    pub fn load(&mut self, records: Option<Vec<AttendanceRecord>>) {
        self.records = records.unwrap_or_default().into();
        self.recompute();
    }

    /// Sets the search term and recomputes.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.recompute();
    }

    /// Returns the current search term.
    pub fn search_term(&self) -> &str {
        &self.term
    }

    /// Returns the current record snapshot.
    ///
    /// The snapshot is shared, so an operation holding it keeps a consistent
    /// view even if a new set is loaded meanwhile.
    pub fn snapshot(&self) -> Arc<[AttendanceRecord]> {
        Arc::clone(&self.records)
    }

    /// Re-derives and re-filters the snapshot.
    ///
    /// Each record is derived exactly once per call; search and display both
    /// read the derived values from this pass.
    pub fn recompute(&mut self) {
        let derived = derive_rows(&self.records);
        self.rows = search_rows(&derived, &self.term);
        debug!(
            total = self.records.len(),
            visible = self.rows.len(),
            term = %self.term,
            "Recomputed attendance view"
        );
    }

    /// Returns the visible rows, in original order.
    pub fn rows(&self) -> &[AttendanceRow] {
        &self.rows
    }

    /// Returns the number of records in the snapshot.
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Builds the export plan for the visible rows only.
    pub fn export_document(&self, report: &ReportConfig) -> ExportDocument {
        ExportDocument::from_rows(&self.rows, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, StatusAccent};

    fn sample_records() -> Vec<AttendanceRecord> {
        vec![
            AttendanceRecord::new(
                "Acme",
                "Jane Doe",
                7,
                "2024-01-01T08:00:00",
                "2024-01-01T17:30:00",
            ),
            AttendanceRecord::new(
                "Globex",
                "John Roe",
                8,
                "2024-01-01T08:00:00",
                "2024-01-01T16:00:00",
            ),
            AttendanceRecord::new(
                "Acme",
                "Mary Major",
                9,
                "2024-01-01T07:00:00",
                "2024-01-01T16:00:00",
            ),
        ]
    }

    fn visible_names(view: &AttendanceView) -> Vec<&str> {
        view.rows().iter().map(|r| r.record.name.as_str()).collect()
    }

    #[test]
    fn test_new_view_is_empty() {
        let view = AttendanceView::new();
        assert!(view.rows().is_empty());
        assert_eq!(view.total(), 0);
        assert_eq!(view.search_term(), "");
    }

    #[test]
    fn test_missing_record_set_is_empty() {
        let mut view = AttendanceView::with_records(sample_records());
        view.load(None);

        assert!(view.rows().is_empty());
        assert_eq!(view.total(), 0);
    }

    #[test]
    fn test_loaded_records_are_all_visible_with_empty_term() {
        let view = AttendanceView::with_records(sample_records());
        assert_eq!(
            visible_names(&view),
            vec!["Jane Doe", "John Roe", "Mary Major"]
        );
    }

    #[test]
    fn test_rows_carry_derived_values() {
        let view = AttendanceView::with_records(sample_records());
        let statuses: Vec<AttendanceStatus> =
            view.rows().iter().map(|r| r.derived.status).collect();

        assert_eq!(
            statuses,
            vec![
                AttendanceStatus::Present,
                AttendanceStatus::Absent,
                AttendanceStatus::Present
            ]
        );
    }

    #[test]
    fn test_term_filters_rows() {
        let mut view = AttendanceView::with_records(sample_records());

        view.set_search_term("ACME");
        assert_eq!(visible_names(&view), vec!["Jane Doe", "Mary Major"]);

        view.set_search_term("absent");
        assert_eq!(visible_names(&view), vec!["John Roe"]);

        view.set_search_term("");
        assert_eq!(view.rows().len(), 3);
    }

    #[test]
    fn test_term_survives_reload() {
        let mut view = AttendanceView::new();
        view.set_search_term("globex");
        assert!(view.rows().is_empty());

        view.load(Some(sample_records()));
        assert_eq!(visible_names(&view), vec!["John Roe"]);
    }

    #[test]
    fn test_snapshot_is_stable_across_reload() {
        let mut view = AttendanceView::with_records(sample_records());
        let snapshot = view.snapshot();

        view.load(Some(vec![]));

        assert_eq!(snapshot.len(), 3);
        assert_eq!(view.total(), 0);
    }

    #[test]
    fn test_export_uses_only_visible_rows() {
        let mut view = AttendanceView::with_records(sample_records());
        view.set_search_term("acme");

        let document = view.export_document(&ReportConfig::default());
        let names: Vec<&str> = document.rows().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["Jane Doe", "Mary Major"]);
        assert!(
            document
                .lines
                .iter()
                .all(|line| line.accent == StatusAccent::Positive)
        );
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut view = AttendanceView::with_records(sample_records());
        view.set_search_term("o");
        let before = view.rows().to_vec();

        view.recompute();

        assert_eq!(view.rows(), before.as_slice());
    }
}
