//! Repository trait for per-alias click statistics.

use crate::domain::entities::{ClickStatistic, NewStatistic, StatisticPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Sort direction for statistics summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// One summary row per alias: identity plus the rolling counters.
///
/// Aliases that were never clicked appear with all counters at zero.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AliasClickSummary {
    pub short_code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub last_hour_clicks: i64,
    pub last_day_clicks: i64,
}

/// Repository interface for click statistics rows.
///
/// The aggregator performs a read-modify-write through `find_by_alias` and
/// `update`; no cross-click serialization is provided here (see the click
/// worker for the single-consumer funnel).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatisticRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatisticRepository: Send + Sync {
    /// Finds the statistics row for an alias, if any click was recorded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_alias(&self, alias_id: i64) -> Result<Option<ClickStatistic>, AppError>;

    /// Creates the statistics row for an alias's first click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a row already exists for the alias
    /// (concurrent first clicks).
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, stat: NewStatistic) -> Result<ClickStatistic, AppError>;

    /// Writes back the counter values for one click.
    ///
    /// `None` window starts in the patch leave the stored values unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the row no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: StatisticPatch) -> Result<ClickStatistic, AppError>;

    /// Per-alias click summaries for an owner, sorted by total clicks.
    ///
    /// Only aliases with an attached short code appear. Never-clicked
    /// aliases report zero counters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn summaries_for_owner(
        &self,
        owner_id: i64,
        sort: SortOrder,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AliasClickSummary>, AppError>;
}
