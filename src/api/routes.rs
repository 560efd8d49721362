//! API route configuration.
//!
//! All endpoints except registration require Basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_alias_handler, deactivate_alias_handler, list_aliases_handler, register_handler,
    statistics_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// Routes that require Basic authentication.
///
/// # Endpoints
///
/// - `POST  /aliases`                    - Create a new alias
/// - `GET   /aliases`                    - List owned aliases (paginated)
/// - `PATCH /aliases/{code}/deactivate`  - Disable an owned alias
/// - `GET   /statistics`                 - Click statistics per owned alias
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/aliases", post(create_alias_handler).get(list_aliases_handler))
        .route("/aliases/{code}/deactivate", patch(deactivate_alias_handler))
        .route("/statistics", get(statistics_handler))
}

/// Routes that are reachable without credentials.
///
/// # Endpoints
///
/// - `POST /accounts/register` - Create a new account
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/accounts/register", post(register_handler))
}
