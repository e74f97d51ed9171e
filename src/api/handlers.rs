//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::view::AttendanceView;

use super::request::AttendanceRequest;
use super::response::{ApiError, ApiErrorResponse, RowResponse, SearchResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/search", post(search_handler))
        .route("/attendance/export", post(export_handler))
        .with_state(state)
}

/// Handler for POST /attendance/search.
///
/// Returns the rows of the supplied record set that match the term, with
/// their derived hours, status and accent.
async fn search_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing search request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let view = build_view(request);
    let rows: Vec<RowResponse> = view.rows().iter().map(RowResponse::from).collect();

    info!(
        correlation_id = %correlation_id,
        total = view.total(),
        matched = rows.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Search completed successfully"
    );

    let response = SearchResponse {
        total: view.total(),
        matched: rows.len(),
        placeholder: state.config().display().search_placeholder.clone(),
        rows,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /attendance/export.
///
/// Renders the rows matching the term as a downloadable document.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let view = build_view(request);
    let document = view.export_document(state.config().report());

    let renderer = state.renderer();
    match renderer.render(&document) {
        Ok(bytes) => {
            info!(
                correlation_id = %correlation_id,
                rows = document.lines.len(),
                bytes = bytes.len(),
                file_name = %document.file_name,
                duration_us = start_time.elapsed().as_micros(),
                "Export completed successfully"
            );
            let disposition = format!("attachment; filename=\"{}\"", document.file_name);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, renderer.content_type().to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Export failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

fn build_view(request: AttendanceRequest) -> AttendanceView {
    let mut view = AttendanceView::new();
    view.set_search_term(request.term.unwrap_or_default());
    view.load(request.records);
    view
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message is only available through the body text
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiError::new(
                "MISSING_CONTENT_TYPE",
                "Content-Type must be application/json",
            )
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
