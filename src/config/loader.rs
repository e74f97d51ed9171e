//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading attendance
//! report configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AttendanceConfig, DisplayConfig, EXPORT_COLUMN_COUNT, ReportConfig};

/// Loads, validates and provides access to attendance configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/attendance/
/// ├── report.yaml   # Export title, file name and page layout
/// └── display.yaml  # Search placeholder and accent colors
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/attendance").unwrap();
/// println!("Exporting to {}", loader.report().file_name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AttendanceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/attendance")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any value fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let report = Self::load_yaml::<ReportConfig>(&path.join("report.yaml"))?;
        let display = Self::load_yaml::<DisplayConfig>(&path.join("display.yaml"))?;

        Self::from_parts(report, display)
    }

    /// Builds a loader from already-parsed settings, validating them.
    pub fn from_parts(report: ReportConfig, display: DisplayConfig) -> EngineResult<Self> {
        validate_report(&report)?;
        validate_display(&display)?;

        Ok(Self {
            config: AttendanceConfig::new(report, display),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AttendanceConfig {
        &self.config
    }

    /// Returns the report settings.
    pub fn report(&self) -> &ReportConfig {
        self.config.report()
    }

    /// Returns the display settings.
    pub fn display(&self) -> &DisplayConfig {
        self.config.display()
    }
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.into(),
    }
}

fn validate_report(report: &ReportConfig) -> EngineResult<()> {
    if report.title.trim().is_empty() {
        return Err(invalid("title", "must not be empty"));
    }

    if !report.file_name.to_lowercase().ends_with(".pdf") || report.file_name.len() <= 4 {
        return Err(invalid("file_name", "must name a .pdf file"));
    }

    let page = &report.page;
    for (field, value) in [
        ("page.width_mm", page.width_mm),
        ("page.height_mm", page.height_mm),
        ("title_font_size", report.title_font_size),
        ("font_size", report.font_size),
        ("row_height_mm", report.row_height_mm),
    ] {
        if value.is_nan() || value <= 0.0 {
            return Err(invalid(field, format!("must be positive, got {}", value)));
        }
    }

    if page.margin_mm < 0.0 || page.margin_mm * 2.0 >= page.width_mm.min(page.height_mm) {
        return Err(invalid(
            "page.margin_mm",
            format!("{} leaves no printable area", page.margin_mm),
        ));
    }

    if report.column_widths_mm.len() != EXPORT_COLUMN_COUNT {
        return Err(invalid(
            "column_widths_mm",
            format!(
                "expected {} entries, found {}",
                EXPORT_COLUMN_COUNT,
                report.column_widths_mm.len()
            ),
        ));
    }

    if report.column_widths_mm.iter().any(|w| w.is_nan() || *w <= 0.0) {
        return Err(invalid("column_widths_mm", "every width must be positive"));
    }

    let table_width: f32 = report.column_widths_mm.iter().sum();
    let printable_width = page.width_mm - page.margin_mm * 2.0;
    if table_width > printable_width {
        return Err(invalid(
            "column_widths_mm",
            format!(
                "table is {}mm wide but only {}mm fit between the margins",
                table_width, printable_width
            ),
        ));
    }

    Ok(())
}

fn validate_display(display: &DisplayConfig) -> EngineResult<()> {
    if display.search_placeholder.trim().is_empty() {
        return Err(invalid("search_placeholder", "must not be empty"));
    }
    Ok(())
}
