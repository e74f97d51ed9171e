//! Configuration types for attendance reporting.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::models::StatusAccent;

/// Number of columns in the exported attendance table.
pub const EXPORT_COLUMN_COUNT: usize = 7;

/// Page geometry in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Page width.
    pub width_mm: f32,
    /// Page height.
    pub height_mm: f32,
    /// Margin applied on every side.
    pub margin_mm: f32,
}

impl Default for PageLayout {
    /// A4 portrait with a 10mm margin.
    fn default() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_mm: 10.0,
        }
    }
}

/// Settings for the exported document, loaded from `report.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title printed above the table.
    pub title: String,
    /// Suggested file name of the artifact.
    pub file_name: String,
    /// Page geometry.
    #[serde(default)]
    pub page: PageLayout,
    /// Font size of the title in points.
    pub title_font_size: f32,
    /// Font size of table cells in points.
    pub font_size: f32,
    /// Height of one table row.
    pub row_height_mm: f32,
    /// Width of each of the seven table columns.
    pub column_widths_mm: Vec<f32>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Employee Attendance".to_string(),
            file_name: "attendance.pdf".to_string(),
            page: PageLayout::default(),
            title_font_size: 16.0,
            font_size: 9.0,
            row_height_mm: 7.0,
            column_widths_mm: vec![30.0, 34.0, 16.0, 34.0, 34.0, 20.0, 22.0],
        }
    }
}

/// An sRGB color written as `#RRGGBB`.
///
/// # Example
///
/// ```
/// use attendance_engine::config::RgbColor;
///
/// let green = RgbColor::try_from("#008000".to_string()).unwrap();
/// assert_eq!(green, RgbColor { r: 0, g: 128, b: 0 });
/// assert_eq!(green.to_string(), "#008000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl RgbColor {
    /// Returns the channels scaled to `0.0..=1.0`.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

impl TryFrom<String> for RgbColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let hex = value
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| format!("expected a #RRGGBB color, got '{}'", value))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| e.to_string())
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_string()
    }
}

impl std::fmt::Display for RgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Colors used for each status accent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccentColors {
    /// Color for `Present`.
    pub positive: RgbColor,
    /// Color for every other status.
    pub negative: RgbColor,
}

impl AccentColors {
    /// Returns the color for an accent.
    pub fn for_accent(&self, accent: StatusAccent) -> RgbColor {
        match accent {
            StatusAccent::Positive => self.positive,
            StatusAccent::Negative => self.negative,
        }
    }
}

impl Default for AccentColors {
    fn default() -> Self {
        Self {
            positive: RgbColor { r: 0, g: 128, b: 0 },
            negative: RgbColor { r: 255, g: 0, b: 0 },
        }
    }
}

/// Presentation settings, loaded from `display.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Placeholder shown in the search input.
    pub search_placeholder: String,
    /// Accent colors.
    #[serde(default)]
    pub colors: AccentColors,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            search_placeholder: "Search by Name or ID or Company or Status".to_string(),
            colors: AccentColors::default(),
        }
    }
}

/// The complete attendance configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceConfig {
    report: ReportConfig,
    display: DisplayConfig,
}

impl AttendanceConfig {
    /// Creates a new AttendanceConfig from its component parts.
    pub fn new(report: ReportConfig, display: DisplayConfig) -> Self {
        Self { report, display }
    }

    /// Returns the report settings.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }

    /// Returns the display settings.
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }
}
