//! PostgreSQL implementation of the alias repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Alias, NewAlias};
use crate::domain::repositories::AliasRepository;
use crate::error::{AppError, map_sqlx_error};
use crate::utils::short_code::CodeError;

/// PostgreSQL repository for URL aliases.
pub struct PgAliasRepository {
    pool: Arc<PgPool>,
}

impl PgAliasRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AliasRepository for PgAliasRepository {
    async fn create_with_code(
        &self,
        new_alias: NewAlias,
        derive_code: fn(i64) -> Result<String, CodeError>,
    ) -> Result<Alias, AppError> {
        let mut tx = self.pool.begin().await?;

        let alias = sqlx::query_as::<_, Alias>(
            r#"
            INSERT INTO aliases (target_url, owner_id, expires_at, is_enabled)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&new_alias.target_url)
        .bind(new_alias.owner_id)
        .bind(new_alias.expires_at)
        .bind(new_alias.is_enabled)
        .fetch_one(&mut *tx)
        .await?;

        // Failures from here on roll the pre-code row back with the
        // transaction, so no committed alias can lack its code.
        let code = derive_code(alias.id).map_err(|e| {
            AppError::creation_incomplete(
                "Failed to derive short code",
                json!({ "alias_id": alias.id, "reason": e.to_string() }),
            )
        })?;

        let alias = sqlx::query_as::<_, Alias>(
            r#"
            UPDATE aliases
            SET short_code = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(&code)
        .bind(alias.id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::creation_incomplete(
                "Failed to attach short code",
                json!({ "alias_id": alias.id, "reason": e.to_string() }),
            )
        })?;

        tx.commit().await?;

        Ok(alias)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Alias>, AppError> {
        let alias = sqlx::query_as::<_, Alias>(
            r#"
            SELECT * FROM aliases WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(alias)
    }

    async fn find_by_code_and_owner(
        &self,
        code: &str,
        owner_id: i64,
    ) -> Result<Option<Alias>, AppError> {
        let alias = sqlx::query_as::<_, Alias>(
            r#"
            SELECT * FROM aliases WHERE short_code = $1 AND owner_id = $2
            "#,
        )
        .bind(code)
        .bind(owner_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(alias)
    }

    async fn list_for_owner(
        &self,
        owner_id: i64,
        active_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Alias>, AppError> {
        let aliases = sqlx::query_as::<_, Alias>(
            r#"
            SELECT * FROM aliases
            WHERE owner_id = $1
              AND ($2 = FALSE OR (is_enabled AND (expires_at IS NULL OR expires_at > NOW())))
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(owner_id)
        .bind(active_only)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(aliases)
    }

    async fn set_enabled(&self, id: i64, enabled: bool) -> Result<Alias, AppError> {
        let alias = sqlx::query_as::<_, Alias>(
            r#"
            UPDATE aliases
            SET is_enabled = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(enabled)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        alias.ok_or_else(|| AppError::not_found("Alias not found", json!({ "id": id })))
    }
}
