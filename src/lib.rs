//! Attendance Engine
//!
//! This crate derives worked hours and presence status from raw employee
//! clock-in/clock-out records, filters them by a free-text search term,
//! and exports the visible rows to a PDF document.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod view;
