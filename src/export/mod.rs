//! Export of the visible attendance rows.
//!
//! The export path turns the currently filtered rows into fixed seven-field
//! [`ExportRow`]s, wraps them in an [`ExportDocument`] with the configured
//! title and file name, and hands that plan to a [`DocumentRenderer`].
//! [`PdfRenderer`] is the bundled renderer.

mod document;
mod pdf;

pub use document::{DocumentRenderer, EXPORT_HEADER, ExportDocument, ExportLine, ExportRow};
pub use pdf::PdfRenderer;
