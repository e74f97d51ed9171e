//! Configuration loading and management for the Attendance Engine.
//!
//! This module loads report and display settings from YAML files: the
//! export title and file name, page layout, column widths, the search
//! placeholder, and the colors paired with each status accent.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/attendance").unwrap();
//! println!("Report title: {}", config.report().title);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AccentColors, AttendanceConfig, DisplayConfig, EXPORT_COLUMN_COUNT, PageLayout, ReportConfig,
    RgbColor,
};
