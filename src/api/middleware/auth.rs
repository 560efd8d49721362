//! Basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Authenticated account attached to the request extensions.
#[derive(Debug, Clone)]
pub struct CurrentAccount {
    pub id: i64,
    pub username: String,
}

/// Authenticates requests using Basic credentials from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(username:password)
/// ```
///
/// # Authentication Flow
///
/// 1. Extract username and password from the `Authorization` header
/// 2. Verify the password hash against the stored account
/// 3. Check that the account is active
/// 4. Insert [`CurrentAccount`] into request extensions
/// 5. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing or malformed
/// - The account does not exist
/// - The password is wrong or the account is deactivated
///
/// The same 401 is returned for all rejection causes so the response does
/// not reveal which accounts exist.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((username, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let account = st
        .auth_service
        .authenticate(&username, password.as_deref().unwrap_or(""))
        .await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentAccount {
        id: account.id,
        username: account.username,
    });

    Ok(next.run(req).await)
}
