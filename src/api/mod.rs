//! HTTP API module for the Attendance Engine.
//!
//! Exposes attendance search and PDF export to a host UI. Every request
//! carries the full record set; the service keeps no attendance data.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AttendanceRequest;
pub use response::{ApiError, ApiErrorResponse, RowResponse, SearchResponse};
pub use state::AppState;
