//! Export rows and the document plan handed to a renderer.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ReportConfig;
use crate::error::EngineResult;
use crate::models::{AttendanceRow, AttendanceStatus, StatusAccent};

/// Header row of the exported table, in column order.
pub const EXPORT_HEADER: [&str; 7] = [
    "Company",
    "Name",
    "ID",
    "Clock In",
    "Clock Out",
    "Total Hours",
    "Status",
];

/// One exported table row.
///
/// Fields are declared in export column order; [`ExportRow::cells`] returns
/// them in that same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    /// Employing organization.
    pub company: String,
    /// Employee display name.
    pub name: String,
    /// Employee identifier as text.
    pub id: String,
    /// Clock-in timestamp as supplied.
    pub clock_in: String,
    /// Clock-out timestamp as supplied.
    pub clock_out: String,
    /// Total hours with two decimals, or `N/A`.
    pub total_hours: String,
    /// Status text.
    pub status: String,
}

impl ExportRow {
    /// Returns the seven cells in column order.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::calculation::derive_row;
    /// use attendance_engine::export::ExportRow;
    /// use attendance_engine::models::AttendanceRecord;
    ///
    /// let record = AttendanceRecord::new(
    ///     "Acme", "Jane Doe", 7, "2024-01-01T08:00:00", "2024-01-01T17:30:00",
    /// );
    /// let row = ExportRow::from(&derive_row(&record));
    /// assert_eq!(
    ///     row.cells(),
    ///     ["Acme", "Jane Doe", "7", "2024-01-01T08:00:00", "2024-01-01T17:30:00", "9.50", "Present"],
    /// );
    /// ```
    pub fn cells(&self) -> [&str; 7] {
        [
            self.company.as_str(),
            self.name.as_str(),
            self.id.as_str(),
            self.clock_in.as_str(),
            self.clock_out.as_str(),
            self.total_hours.as_str(),
            self.status.as_str(),
        ]
    }
}

impl From<&AttendanceRow> for ExportRow {
    fn from(row: &AttendanceRow) -> Self {
        Self {
            company: row.record.company.clone(),
            name: row.record.name.clone(),
            id: row.record.id.to_string(),
            clock_in: row.record.clock_in.clone(),
            clock_out: row.record.clock_out.clone(),
            total_hours: row.derived.total_hours_text(),
            status: row.derived.status.to_string(),
        }
    }
}

/// An export row together with the accent its status is drawn in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportLine {
    /// The row cells.
    pub row: ExportRow,
    /// Accent of the status cell.
    pub accent: StatusAccent,
}

/// Everything a renderer needs to produce the exported artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Title printed above the table.
    pub title: String,
    /// Suggested artifact file name.
    pub file_name: String,
    /// Table header.
    pub header: [String; 7],
    /// Table body, in display order.
    pub lines: Vec<ExportLine>,
}

impl ExportDocument {
    /// Builds the document plan for exactly the given rows, in order.
    pub fn from_rows(rows: &[AttendanceRow], report: &ReportConfig) -> Self {
        let unparseable = rows
            .iter()
            .filter(|row| row.derived.status == AttendanceStatus::Unknown)
            .count();
        if unparseable > 0 {
            warn!(
                unparseable,
                total = rows.len(),
                "Exporting rows with unparseable timestamps"
            );
        }

        Self {
            title: report.title.clone(),
            file_name: report.file_name.clone(),
            header: EXPORT_HEADER.map(str::to_string),
            lines: rows
                .iter()
                .map(|row| ExportLine {
                    row: ExportRow::from(row),
                    accent: row.derived.status.accent(),
                })
                .collect(),
        }
    }

    /// Returns the bare export rows, in order.
    pub fn rows(&self) -> impl Iterator<Item = &ExportRow> {
        self.lines.iter().map(|line| &line.row)
    }
}

/// Turns an [`ExportDocument`] into a file artifact.
pub trait DocumentRenderer {
    /// MIME type of the produced artifact.
    fn content_type(&self) -> &'static str;

    /// Renders the document to bytes.
    fn render(&self, document: &ExportDocument) -> EngineResult<Vec<u8>>;
}
