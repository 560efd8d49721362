//! Handler for aggregated click statistics.

use axum::{
    Extension, Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::statistics::{StatisticSummaryResponse, StatisticsQuery};
use crate::api::middleware::auth::CurrentAccount;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves click statistics for the authenticated account's aliases.
///
/// # Endpoint
///
/// `GET /api/v1/statistics`
///
/// # Query Parameters
///
/// - `sort_order` (optional): `asc` or `desc` by total clicks (default: `desc`)
/// - `page` (optional): page number (default: 1)
/// - `page_size` (optional): items per page (default: 20, max: 100)
///
/// # Response
///
/// One row per alias with total, last-hour, and last-day click counts.
/// Aliases that were never clicked appear with zero counts. Window counts
/// are fixed-window: they reset on the first click after the window
/// elapses, they do not slide.
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn statistics_handler(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    Query(params): Query<StatisticsQuery>,
) -> Result<Json<Vec<StatisticSummaryResponse>>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let summaries = state
        .statistic_service
        .statistics_for_owner(account.id, params.sort_order.into(), limit, offset)
        .await?;

    let response = summaries
        .iter()
        .map(|summary| StatisticSummaryResponse::from_summary(summary, &state.base_url))
        .collect();

    Ok(Json(response))
}
