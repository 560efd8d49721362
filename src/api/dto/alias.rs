//! DTOs for alias management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use serde_with::{DisplayFromStr, serde_as};

use crate::api::dto::pagination::PaginationParams;
use crate::domain::entities::Alias;

fn default_enabled() -> bool {
    true
}

/// Request to create a new alias.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAliasRequest {
    /// Redirect target; scheme and host are re-checked by the service.
    #[validate(length(max = 2048, message = "URL too long"))]
    #[validate(url(message = "Invalid URL format"))]
    pub target_url: String,

    /// Optional expiry; a past timestamp makes the alias inactive.
    pub expires_at: Option<DateTime<Utc>>,

    /// Whether the alias starts enabled. Defaults to true.
    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
}

/// Query parameters for listing aliases.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ListAliasesQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub active_only: Option<bool>,

    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// Alias representation in API responses.
#[derive(Debug, Serialize)]
pub struct AliasResponse {
    pub id: i64,
    pub target_url: String,
    pub short_code: String,
    /// Fully-qualified short URL: `base_url + "/" + short_code`.
    pub short_url: String,
    pub owner_id: Option<i64>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_enabled: bool,
    /// Derived at read time: enabled and not expired.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AliasResponse {
    /// Builds the API representation of an alias.
    pub fn from_alias(alias: &Alias, base_url: &str) -> Self {
        let short_code = alias.short_code.clone().unwrap_or_default();
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), short_code);

        Self {
            id: alias.id,
            target_url: alias.target_url.clone(),
            short_code,
            short_url,
            owner_id: alias.owner_id,
            expires_at: alias.expires_at,
            is_enabled: alias.is_enabled,
            is_active: alias.is_active(),
            created_at: alias.created_at,
            updated_at: alias.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_builds_fully_qualified_short_url() {
        let now = Utc::now();
        let alias = Alias {
            id: 1,
            target_url: "https://example.com/x".to_string(),
            short_code: Some("1IzyDeodHmT".to_string()),
            owner_id: Some(7),
            expires_at: None,
            is_enabled: true,
            created_at: now,
            updated_at: now,
        };

        let response = AliasResponse::from_alias(&alias, "https://sho.rt/");

        assert_eq!(response.short_url, "https://sho.rt/1IzyDeodHmT");
        assert!(response.is_active);
    }

    #[test]
    fn test_validation_rejects_malformed_url() {
        let request = CreateAliasRequest {
            target_url: "not-a-url".to_string(),
            expires_at: None,
            is_enabled: true,
        };
        assert!(request.validate().is_err());
    }
}
