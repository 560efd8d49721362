//! DTOs for the statistics endpoint.

use serde::{Deserialize, Serialize};

use crate::api::dto::pagination::PaginationParams;
use crate::domain::repositories::{AliasClickSummary, SortOrder};

/// Query parameters for the statistics summary.
#[derive(Debug, Deserialize)]
pub struct StatisticsQuery {
    #[serde(default)]
    pub sort_order: SortOrderParam,

    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// Wire form of the sort direction.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrderParam {
    Asc,
    #[default]
    Desc,
}

impl From<SortOrderParam> for SortOrder {
    fn from(param: SortOrderParam) -> Self {
        match param {
            SortOrderParam::Asc => SortOrder::Asc,
            SortOrderParam::Desc => SortOrder::Desc,
        }
    }
}

/// One statistics row in the API response.
#[derive(Debug, Serialize)]
pub struct StatisticSummaryResponse {
    pub short_url: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub last_hour_clicks: i64,
    pub last_day_clicks: i64,
}

impl StatisticSummaryResponse {
    /// Builds the API row, qualifying the short code with the base URL.
    pub fn from_summary(summary: &AliasClickSummary, base_url: &str) -> Self {
        Self {
            short_url: format!(
                "{}/{}",
                base_url.trim_end_matches('/'),
                summary.short_code
            ),
            target_url: summary.target_url.clone(),
            total_clicks: summary.total_clicks,
            last_hour_clicks: summary.last_hour_clicks,
            last_day_clicks: summary.last_day_clicks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_defaults_to_desc() {
        assert_eq!(SortOrderParam::default(), SortOrderParam::Desc);
    }

    #[test]
    fn test_summary_response_builds_short_url() {
        let summary = AliasClickSummary {
            short_code: "abc".to_string(),
            target_url: "https://example.com".to_string(),
            total_clicks: 5,
            last_hour_clicks: 1,
            last_day_clicks: 2,
        };

        let response = StatisticSummaryResponse::from_summary(&summary, "https://sho.rt");
        assert_eq!(response.short_url, "https://sho.rt/abc");
    }
}
