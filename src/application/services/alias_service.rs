//! Alias lifecycle service: creation, lookup, listing, deactivation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{Alias, NewAlias};
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;
use crate::utils::short_code;
use crate::utils::url_validator::validate_target_url;

/// Input for creating an alias.
#[derive(Debug, Clone)]
pub struct CreateAlias {
    pub target_url: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_enabled: bool,
}

/// Service owning alias records and their two-phase creation.
pub struct AliasService<R: AliasRepository> {
    repository: Arc<R>,
}

impl<R: AliasRepository> AliasService<R> {
    /// Creates a new alias service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates an alias and derives its short code from the assigned id.
    ///
    /// The repository runs both phases (persist pre-code row, attach the
    /// derived code) inside one transaction, so a failed second phase
    /// cannot leave a reachable orphan.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the target URL is rejected.
    /// Returns [`AppError::CreationIncomplete`] if the identifier was
    /// assigned but the code never attached; the caller must treat the
    /// operation as failed.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_alias(
        &self,
        request: CreateAlias,
        owner_id: Option<i64>,
    ) -> Result<Alias, AppError> {
        let target_url = validate_target_url(&request.target_url)?;

        let new_alias = NewAlias {
            target_url,
            owner_id,
            expires_at: request.expires_at,
            is_enabled: request.is_enabled,
        };

        let alias = self
            .repository
            .create_with_code(new_alias, short_code::code_for_id)
            .await?;

        if alias.short_code.is_none() {
            return Err(AppError::creation_incomplete(
                "Alias was created without a short code",
                json!({ "alias_id": alias.id }),
            ));
        }

        tracing::info!(
            alias_id = alias.id,
            short_code = alias.short_code.as_deref(),
            "created alias"
        );

        Ok(alias)
    }

    /// Looks up an alias by short code, returning it only if active.
    ///
    /// Disabled and expired aliases behave exactly like unknown codes so
    /// that lookups cannot probe for their existence.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_active_by_code(&self, code: &str) -> Result<Option<Alias>, AppError> {
        let Some(alias) = self.repository.find_by_code(code).await? else {
            return Ok(None);
        };

        if !alias.is_active() {
            tracing::debug!(alias_id = alias.id, code, "alias is disabled or expired");
            return Ok(None);
        }

        Ok(Some(alias))
    }

    /// Lists an owner's aliases, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_for_owner(
        &self,
        owner_id: i64,
        active_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Alias>, AppError> {
        self.repository
            .list_for_owner(owner_id, active_only, limit, offset)
            .await
    }

    /// Deactivates an alias by short code if it belongs to `owner_id`.
    ///
    /// Returns `Ok(None)` both when the code is unknown and when the alias
    /// belongs to someone else; the two cases are indistinguishable by
    /// design.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn deactivate(
        &self,
        code: &str,
        owner_id: i64,
    ) -> Result<Option<Alias>, AppError> {
        let Some(alias) = self
            .repository
            .find_by_code_and_owner(code, owner_id)
            .await?
        else {
            return Ok(None);
        };

        let updated = self.repository.set_enabled(alias.id, false).await?;
        tracing::info!(alias_id = updated.id, code, "deactivated alias");

        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAliasRepository;
    use chrono::Duration;

    fn stored_alias(id: i64, url: &str, enabled: bool, expires_at: Option<DateTime<Utc>>) -> Alias {
        let now = Utc::now();
        Alias {
            id,
            target_url: url.to_string(),
            short_code: Some(short_code::code_for_id(id).unwrap()),
            owner_id: Some(7),
            expires_at,
            is_enabled: enabled,
            created_at: now,
            updated_at: now,
        }
    }

    fn create_request(url: &str) -> CreateAlias {
        CreateAlias {
            target_url: url.to_string(),
            expires_at: None,
            is_enabled: true,
        }
    }

    #[tokio::test]
    async fn test_create_alias_derives_code_from_id() {
        let mut mock_repo = MockAliasRepository::new();

        mock_repo
            .expect_create_with_code()
            .withf(|new_alias, _| new_alias.target_url == "https://example.com/x")
            .times(1)
            .returning(|new_alias, derive| {
                let code = derive(5).unwrap();
                let now = Utc::now();
                Ok(Alias {
                    id: 5,
                    target_url: new_alias.target_url,
                    short_code: Some(code),
                    owner_id: new_alias.owner_id,
                    expires_at: new_alias.expires_at,
                    is_enabled: new_alias.is_enabled,
                    created_at: now,
                    updated_at: now,
                })
            });

        let service = AliasService::new(Arc::new(mock_repo));

        let alias = service
            .create_alias(create_request("https://example.com/x"), Some(7))
            .await
            .unwrap();

        assert_eq!(alias.id, 5);
        assert_eq!(
            alias.short_code.as_deref(),
            Some(short_code::code_for_id(5).unwrap().as_str())
        );
        assert_eq!(alias.target_url, "https://example.com/x");
    }

    #[tokio::test]
    async fn test_create_alias_rejects_ftp_scheme() {
        let mut mock_repo = MockAliasRepository::new();
        mock_repo.expect_create_with_code().times(0);

        let service = AliasService::new(Arc::new(mock_repo));

        let result = service
            .create_alias(create_request("ftp://example.com"), None)
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_alias_surfaces_incomplete_creation() {
        let mut mock_repo = MockAliasRepository::new();

        mock_repo.expect_create_with_code().times(1).returning(|_, _| {
            Err(AppError::creation_incomplete(
                "Failed to attach short code",
                serde_json::json!({ "alias_id": 9 }),
            ))
        });

        let service = AliasService::new(Arc::new(mock_repo));

        let result = service
            .create_alias(create_request("https://example.com"), None)
            .await;

        assert!(matches!(result, Err(AppError::CreationIncomplete { .. })));
    }

    #[tokio::test]
    async fn test_create_alias_rejects_codeless_row() {
        let mut mock_repo = MockAliasRepository::new();

        mock_repo.expect_create_with_code().times(1).returning(|new_alias, _| {
            let now = Utc::now();
            Ok(Alias {
                id: 3,
                target_url: new_alias.target_url,
                short_code: None,
                owner_id: new_alias.owner_id,
                expires_at: new_alias.expires_at,
                is_enabled: new_alias.is_enabled,
                created_at: now,
                updated_at: now,
            })
        });

        let service = AliasService::new(Arc::new(mock_repo));

        let result = service
            .create_alias(create_request("https://example.com"), None)
            .await;

        assert!(matches!(result, Err(AppError::CreationIncomplete { .. })));
    }

    #[tokio::test]
    async fn test_get_active_by_code_returns_active_alias() {
        let mut mock_repo = MockAliasRepository::new();

        let alias = stored_alias(1, "https://example.com/x", true, None);
        let code = alias.short_code.clone().unwrap();
        mock_repo
            .expect_find_by_code()
            .withf(move |c| c == code)
            .times(1)
            .returning(move |_| Ok(Some(alias.clone())));

        let service = AliasService::new(Arc::new(mock_repo));

        let found = service
            .get_active_by_code(&short_code::code_for_id(1).unwrap())
            .await
            .unwrap();

        assert!(found.is_some());
        assert_eq!(found.unwrap().target_url, "https://example.com/x");
    }

    #[tokio::test]
    async fn test_get_active_by_code_hides_disabled_alias() {
        let mut mock_repo = MockAliasRepository::new();

        let alias = stored_alias(1, "https://example.com/x", false, None);
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(alias.clone())));

        let service = AliasService::new(Arc::new(mock_repo));

        let found = service.get_active_by_code("whatever").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_get_active_by_code_hides_expired_alias() {
        let mut mock_repo = MockAliasRepository::new();

        let past = Utc::now() - Duration::hours(1);
        let alias = stored_alias(1, "https://example.com/x", true, Some(past));
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(alias.clone())));

        let service = AliasService::new(Arc::new(mock_repo));

        let found = service.get_active_by_code("whatever").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_deactivate_unknown_code_returns_none() {
        let mut mock_repo = MockAliasRepository::new();

        mock_repo
            .expect_find_by_code_and_owner()
            .times(1)
            .returning(|_, _| Ok(None));
        mock_repo.expect_set_enabled().times(0);

        let service = AliasService::new(Arc::new(mock_repo));

        let result = service.deactivate("nope", 7).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_deactivate_owned_alias_disables_it() {
        let mut mock_repo = MockAliasRepository::new();

        let alias = stored_alias(4, "https://example.com", true, None);
        mock_repo
            .expect_find_by_code_and_owner()
            .withf(|_, owner| *owner == 7)
            .times(1)
            .returning(move |_, _| Ok(Some(alias.clone())));

        let mut disabled = stored_alias(4, "https://example.com", false, None);
        disabled.is_enabled = false;
        mock_repo
            .expect_set_enabled()
            .withf(|id, enabled| *id == 4 && !enabled)
            .times(1)
            .returning(move |_, _| Ok(disabled.clone()));

        let service = AliasService::new(Arc::new(mock_repo));

        let result = service.deactivate("somecode", 7).await.unwrap();
        assert!(result.is_some());
        assert!(!result.unwrap().is_enabled);
    }
}
