//! Handler for short code redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code to an active alias
/// 2. Enqueue a click event for background aggregation (fire-and-forget)
/// 3. Return 302 Found with the target in `Location`
///
/// # Click Tracking
///
/// Click events go to a bounded channel consumed by a background worker.
/// If the queue is full or the worker is gone, the click is dropped and
/// the redirect is served anyway.
///
/// # Caching
///
/// Responses carry `Cache-Control: no-store` so intermediaries replay the
/// lookup (and the click) on every visit.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown, disabled, or expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target_url = state
        .redirect_service
        .resolve(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Alias not found", json!({ "code": code })))?;

    let response = Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, target_url)
        .header(header::CACHE_CONTROL, "no-store")
        .body(axum::body::Body::empty())
        .map_err(|e| AppError::internal("Failed to build redirect", json!({ "error": e.to_string() })))?;

    Ok(response.into_response())
}
