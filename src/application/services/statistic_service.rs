//! Click statistics service: the rolling counter aggregator.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::ClickStatistic;
use crate::domain::repositories::{AliasClickSummary, SortOrder, StatisticRepository};
use crate::error::AppError;

/// Service maintaining total/hourly/daily click counters per alias.
pub struct StatisticService<R: StatisticRepository> {
    repository: Arc<R>,
}

impl<R: StatisticRepository> StatisticService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Records one click against an alias.
    ///
    /// Creates the statistics row on the first click, otherwise applies
    /// the fixed-window counter arithmetic
    /// ([`ClickStatistic::apply_click`]) and writes the row back. This is
    /// a read-modify-write without row locking; concurrent writers from
    /// separate processes may lose an increment, which is accepted —
    /// counters never decrease.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Callers on the
    /// redirect path must swallow and log this error.
    pub async fn record_click(&self, alias_id: i64) -> Result<(), AppError> {
        let now = Utc::now();

        match self.repository.find_by_alias(alias_id).await? {
            Some(stat) => {
                let patch = stat.apply_click(now);
                self.repository.update(stat.id, patch).await?;
                tracing::debug!(alias_id, "updated click statistic");
            }
            None => {
                self.repository
                    .create(ClickStatistic::first_click(alias_id, now))
                    .await?;
                tracing::debug!(alias_id, "created click statistic");
            }
        }

        Ok(())
    }

    /// Per-alias click summaries for an owner, sorted by total clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn statistics_for_owner(
        &self,
        owner_id: i64,
        sort: SortOrder,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AliasClickSummary>, AppError> {
        self.repository
            .summaries_for_owner(owner_id, sort, limit, offset)
            .await
    }
}
