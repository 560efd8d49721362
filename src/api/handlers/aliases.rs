//! Handlers for alias management endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::alias::{AliasResponse, CreateAliasRequest, ListAliasesQuery};
use crate::api::middleware::auth::CurrentAccount;
use crate::application::services::alias_service::CreateAlias;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new alias owned by the authenticated account.
///
/// # Endpoint
///
/// `POST /api/v1/aliases`
///
/// # Request Body
///
/// ```json
/// {
///   "target_url": "https://example.com/some/long/path",
///   "expires_at": "2026-12-31T00:00:00Z",
///   "is_enabled": true
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the target URL fails validation.
/// Returns 500 with a creation-incomplete payload if the short code could
/// not be attached; the alias is not reachable in that case.
pub async fn create_alias_handler(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    Json(payload): Json<CreateAliasRequest>,
) -> Result<(StatusCode, Json<AliasResponse>), AppError> {
    payload.validate()?;

    let alias = state
        .alias_service
        .create_alias(
            CreateAlias {
                target_url: payload.target_url,
                expires_at: payload.expires_at,
                is_enabled: payload.is_enabled,
            },
            Some(account.id),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AliasResponse::from_alias(&alias, &state.base_url)),
    ))
}

/// Lists aliases owned by the authenticated account.
///
/// # Endpoint
///
/// `GET /api/v1/aliases`
///
/// # Query Parameters
///
/// - `active_only` (optional): when `true`, hides disabled and expired
///   aliases (default: `false`)
/// - `page` (optional): page number (default: 1)
/// - `page_size` (optional): items per page (default: 20, max: 100)
pub async fn list_aliases_handler(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    Query(params): Query<ListAliasesQuery>,
) -> Result<Json<Vec<AliasResponse>>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let aliases = state
        .alias_service
        .list_for_owner(
            account.id,
            params.active_only.unwrap_or(false),
            limit,
            offset,
        )
        .await?;

    let response = aliases
        .iter()
        .map(|alias| AliasResponse::from_alias(alias, &state.base_url))
        .collect();

    Ok(Json(response))
}

/// Deactivates an alias owned by the authenticated account.
///
/// # Endpoint
///
/// `PATCH /api/v1/aliases/{code}/deactivate`
///
/// # Behavior
///
/// Disables the alias so it no longer redirects. The record and its
/// statistics are kept. Deactivating an already-disabled alias succeeds.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown **or** belongs to another
/// account; the two cases are indistinguishable in the response.
pub async fn deactivate_alias_handler(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    Path(code): Path<String>,
) -> Result<Json<AliasResponse>, AppError> {
    let alias = state
        .alias_service
        .deactivate(&code, account.id)
        .await?
        .ok_or_else(|| AppError::not_found("Alias not found", json!({ "code": code })))?;

    Ok(Json(AliasResponse::from_alias(&alias, &state.base_url)))
}
