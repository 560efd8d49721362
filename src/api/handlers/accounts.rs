//! Handler for account registration.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::account::{AccountResponse, RegisterRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /api/v1/accounts/register`
///
/// This is the only unauthenticated API endpoint.
///
/// # Request Body
///
/// ```json
/// {
///   "username": "alice",
///   "password": "correct horse battery staple"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if username or password fail validation.
/// Returns 409 Conflict if the username is already taken.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    payload.validate()?;

    let account = state
        .auth_service
        .register(&payload.username, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(AccountResponse::from(&account))))
}
