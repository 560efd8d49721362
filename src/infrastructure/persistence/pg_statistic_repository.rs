//! PostgreSQL implementation of the statistics repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ClickStatistic, NewStatistic, StatisticPatch};
use crate::domain::repositories::{AliasClickSummary, SortOrder, StatisticRepository};
use crate::error::AppError;

/// PostgreSQL repository for per-alias click counters.
pub struct PgStatisticRepository {
    pool: Arc<PgPool>,
}

impl PgStatisticRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatisticRepository for PgStatisticRepository {
    async fn find_by_alias(&self, alias_id: i64) -> Result<Option<ClickStatistic>, AppError> {
        let stat = sqlx::query_as::<_, ClickStatistic>(
            r#"
            SELECT * FROM alias_statistics WHERE alias_id = $1
            "#,
        )
        .bind(alias_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(stat)
    }

    async fn create(&self, stat: NewStatistic) -> Result<ClickStatistic, AppError> {
        let created = sqlx::query_as::<_, ClickStatistic>(
            r#"
            INSERT INTO alias_statistics
                (alias_id, total_clicks, last_hour_clicks, last_day_clicks,
                 last_hour_window_start, last_day_window_start, last_clicked_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(stat.alias_id)
        .bind(stat.total_clicks)
        .bind(stat.last_hour_clicks)
        .bind(stat.last_day_clicks)
        .bind(stat.last_hour_window_start)
        .bind(stat.last_day_window_start)
        .bind(stat.last_clicked_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(created)
    }

    async fn update(&self, id: i64, patch: StatisticPatch) -> Result<ClickStatistic, AppError> {
        // COALESCE keeps a window start untouched when the patch did not
        // reset that window.
        let updated = sqlx::query_as::<_, ClickStatistic>(
            r#"
            UPDATE alias_statistics
            SET total_clicks = $2,
                last_hour_clicks = $3,
                last_day_clicks = $4,
                last_hour_window_start = COALESCE($5, last_hour_window_start),
                last_day_window_start = COALESCE($6, last_day_window_start),
                last_clicked_at = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.total_clicks)
        .bind(patch.last_hour_clicks)
        .bind(patch.last_day_clicks)
        .bind(patch.last_hour_window_start)
        .bind(patch.last_day_window_start)
        .bind(patch.last_clicked_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        updated.ok_or_else(|| AppError::not_found("Statistic not found", json!({ "id": id })))
    }

    async fn summaries_for_owner(
        &self,
        owner_id: i64,
        sort: SortOrder,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AliasClickSummary>, AppError> {
        // Sort direction cannot be bound as a parameter.
        let query = match sort {
            SortOrder::Desc => {
                r#"
                SELECT a.short_code, a.target_url,
                       COALESCE(s.total_clicks, 0) AS total_clicks,
                       COALESCE(s.last_hour_clicks, 0) AS last_hour_clicks,
                       COALESCE(s.last_day_clicks, 0) AS last_day_clicks
                FROM aliases a
                LEFT JOIN alias_statistics s ON s.alias_id = a.id
                WHERE a.owner_id = $1 AND a.short_code IS NOT NULL
                ORDER BY COALESCE(s.total_clicks, 0) DESC
                LIMIT $2 OFFSET $3
                "#
            }
            SortOrder::Asc => {
                r#"
                SELECT a.short_code, a.target_url,
                       COALESCE(s.total_clicks, 0) AS total_clicks,
                       COALESCE(s.last_hour_clicks, 0) AS last_hour_clicks,
                       COALESCE(s.last_day_clicks, 0) AS last_day_clicks
                FROM aliases a
                LEFT JOIN alias_statistics s ON s.alias_id = a.id
                WHERE a.owner_id = $1 AND a.short_code IS NOT NULL
                ORDER BY COALESCE(s.total_clicks, 0) ASC
                LIMIT $2 OFFSET $3
                "#
            }
        };

        let summaries = sqlx::query_as::<_, AliasClickSummary>(query)
            .bind(owner_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(summaries)
    }
}
