//! Response types for the Attendance Engine API.
//!
//! This module defines the search response body, the error response
//! structures, and the mapping from engine errors to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{AttendanceRow, AttendanceStatus, StatusAccent};

/// One visible table row as sent to the host UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowResponse {
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
    /// Derived status.
    pub status: AttendanceStatus,
    /// Accent the status text is drawn in.
    pub accent: StatusAccent,
}

impl From<&AttendanceRow> for RowResponse {
    fn from(row: &AttendanceRow) -> Self {
        Self {
            company: row.record.company.clone(),
            name: row.record.name.clone(),
            id: row.record.id.to_string(),
            clock_in: row.record.clock_in.clone(),
            clock_out: row.record.clock_out.clone(),
            total_hours: row.derived.total_hours_text(),
            status: row.derived.status,
            accent: row.derived.status.accent(),
        }
    }
}

/// Response body for the `/attendance/search` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Number of records supplied.
    pub total: usize,
    /// Number of records matching the term.
    pub matched: usize,
    /// Placeholder for the host's search input.
    pub placeholder: String,
    /// Matching rows, in original order.
    pub rows: Vec<RowResponse>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration",
                    format!("{}: {}", field, message),
                ),
            },
            // Request rows absorb unparseable timestamps as Unknown, so this
            // only surfaces from a derivation bug.
            EngineError::UnparseableTimestamp { field, value } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INTERNAL_ERROR",
                    "Derivation failed",
                    format!("Unparseable timestamp in {}: '{}'", field, value),
                ),
            },
            EngineError::RenderError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("RENDER_ERROR", "Export failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::derive_row;
    use crate::models::AttendanceRecord;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_render_error_maps_to_internal_server_error() {
        let engine_error = EngineError::RenderError {
            message: "boom".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "RENDER_ERROR");
        assert_eq!(api_error.error.details.as_deref(), Some("boom"));
    }

    #[test]
    fn test_unparseable_timestamp_maps_to_internal_error() {
        let engine_error = EngineError::UnparseableTimestamp {
            field: "clockIn".to_string(),
            value: "soon".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "INTERNAL_ERROR");
        assert_eq!(
            api_error.error.details.as_deref(),
            Some("Unparseable timestamp in clockIn: 'soon'")
        );
    }

    #[test]
    fn test_row_response_serialization() {
        let record = AttendanceRecord::new(
            "Acme",
            "Jane Doe",
            7,
            "2024-01-01T08:00:00",
            "2024-01-01T17:30:00",
        );
        let row = RowResponse::from(&derive_row(&record));

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["company"], "Acme");
        assert_eq!(json["id"], "7");
        assert_eq!(json["clockIn"], "2024-01-01T08:00:00");
        assert_eq!(json["totalHours"], "9.50");
        assert_eq!(json["status"], "Present");
        assert_eq!(json["accent"], "positive");
    }
}
