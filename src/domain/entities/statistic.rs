//! Click statistics entity and the fixed-window counter arithmetic.
//!
//! Counters are fixed-window, not sliding: a click at minute 59 and one at
//! minute 61 can land in different hour windows even though two minutes
//! elapsed. This is the accepted approximation, not a bug.

use chrono::{DateTime, Duration, Utc};
use sqlx::FromRow;

/// One statistics row per alias, created lazily on the first click.
///
/// Invariant: `total_clicks >= last_hour_clicks` and
/// `total_clicks >= last_day_clicks`. Window counts only shrink by elapsing
/// their window; no counter ever decreases.
#[derive(Debug, Clone, FromRow)]
pub struct ClickStatistic {
    pub id: i64,
    pub alias_id: i64,
    pub total_clicks: i64,
    pub last_hour_clicks: i64,
    pub last_day_clicks: i64,
    pub last_hour_window_start: Option<DateTime<Utc>>,
    pub last_day_window_start: Option<DateTime<Utc>>,
    pub last_clicked_at: Option<DateTime<Utc>>,
}

/// Input data for the first click on an alias.
#[derive(Debug, Clone)]
pub struct NewStatistic {
    pub alias_id: i64,
    pub total_clicks: i64,
    pub last_hour_clicks: i64,
    pub last_day_clicks: i64,
    pub last_hour_window_start: DateTime<Utc>,
    pub last_day_window_start: DateTime<Utc>,
    pub last_clicked_at: DateTime<Utc>,
}

/// Counter values for one subsequent click.
///
/// Window starts are `Some` only when the corresponding window was reset;
/// `None` leaves the stored value unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticPatch {
    pub total_clicks: i64,
    pub last_hour_clicks: i64,
    pub last_day_clicks: i64,
    pub last_hour_window_start: Option<DateTime<Utc>>,
    pub last_day_window_start: Option<DateTime<Utc>>,
    pub last_clicked_at: DateTime<Utc>,
}

impl ClickStatistic {
    /// Values for the statistics row created on an alias's first click.
    pub fn first_click(alias_id: i64, now: DateTime<Utc>) -> NewStatistic {
        NewStatistic {
            alias_id,
            total_clicks: 1,
            last_hour_clicks: 1,
            last_day_clicks: 1,
            last_hour_window_start: now,
            last_day_window_start: now,
            last_clicked_at: now,
        }
    }

    /// Computes the counter values after one click at `now`.
    ///
    /// The total always increments. Each window is handled independently:
    /// if its start is unset or the window has fully elapsed, the count
    /// resets to 1 and the start moves to `now`; otherwise the count
    /// increments.
    pub fn apply_click(&self, now: DateTime<Utc>) -> StatisticPatch {
        let (hour_clicks, hour_start) = next_window(
            self.last_hour_clicks,
            self.last_hour_window_start,
            now,
            Duration::hours(1),
        );
        let (day_clicks, day_start) = next_window(
            self.last_day_clicks,
            self.last_day_window_start,
            now,
            Duration::hours(24),
        );

        StatisticPatch {
            total_clicks: self.total_clicks + 1,
            last_hour_clicks: hour_clicks,
            last_day_clicks: day_clicks,
            last_hour_window_start: hour_start,
            last_day_window_start: day_start,
            last_clicked_at: now,
        }
    }
}

/// Fixed-window step: `(new_count, new_window_start_if_reset)`.
fn next_window(
    count: i64,
    window_start: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    window: Duration,
) -> (i64, Option<DateTime<Utc>>) {
    match window_start {
        Some(start) if now - start < window => (count + 1, None),
        _ => (1, Some(now)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statistic(
        total: i64,
        hour: i64,
        day: i64,
        hour_start: Option<DateTime<Utc>>,
        day_start: Option<DateTime<Utc>>,
    ) -> ClickStatistic {
        ClickStatistic {
            id: 1,
            alias_id: 10,
            total_clicks: total,
            last_hour_clicks: hour,
            last_day_clicks: day,
            last_hour_window_start: hour_start,
            last_day_window_start: day_start,
            last_clicked_at: hour_start.or(day_start),
        }
    }

    #[test]
    fn test_first_click_sets_everything_to_one() {
        let now = Utc::now();
        let stat = ClickStatistic::first_click(10, now);

        assert_eq!(stat.alias_id, 10);
        assert_eq!(stat.total_clicks, 1);
        assert_eq!(stat.last_hour_clicks, 1);
        assert_eq!(stat.last_day_clicks, 1);
        assert_eq!(stat.last_hour_window_start, now);
        assert_eq!(stat.last_day_window_start, now);
        assert_eq!(stat.last_clicked_at, now);
    }

    #[test]
    fn test_second_click_within_both_windows_increments_all() {
        let start = Utc::now();
        let stat = statistic(1, 1, 1, Some(start), Some(start));

        let patch = stat.apply_click(start + Duration::minutes(5));

        assert_eq!(patch.total_clicks, 2);
        assert_eq!(patch.last_hour_clicks, 2);
        assert_eq!(patch.last_day_clicks, 2);
        assert_eq!(patch.last_hour_window_start, None);
        assert_eq!(patch.last_day_window_start, None);
    }

    #[test]
    fn test_click_after_61_minutes_resets_hour_only() {
        let start = Utc::now();
        let stat = statistic(2, 2, 2, Some(start), Some(start));

        let now = start + Duration::minutes(61);
        let patch = stat.apply_click(now);

        assert_eq!(patch.total_clicks, 3);
        assert_eq!(patch.last_hour_clicks, 1);
        assert_eq!(patch.last_hour_window_start, Some(now));
        assert_eq!(patch.last_day_clicks, 3);
        assert_eq!(patch.last_day_window_start, None);
    }

    #[test]
    fn test_click_after_25_hours_resets_both_windows() {
        let start = Utc::now();
        let stat = statistic(9, 4, 7, Some(start), Some(start));

        let now = start + Duration::hours(25);
        let patch = stat.apply_click(now);

        assert_eq!(patch.total_clicks, 10);
        assert_eq!(patch.last_hour_clicks, 1);
        assert_eq!(patch.last_day_clicks, 1);
        assert_eq!(patch.last_hour_window_start, Some(now));
        assert_eq!(patch.last_day_window_start, Some(now));
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        // Exactly one hour elapsed counts as a new window.
        let start = Utc::now();
        let stat = statistic(5, 3, 3, Some(start), Some(start));

        let now = start + Duration::hours(1);
        let patch = stat.apply_click(now);

        assert_eq!(patch.last_hour_clicks, 1);
        assert_eq!(patch.last_hour_window_start, Some(now));
        assert_eq!(patch.last_day_clicks, 4);
    }

    #[test]
    fn test_unset_window_start_resets_to_one() {
        let now = Utc::now();
        let stat = statistic(5, 3, 3, None, None);

        let patch = stat.apply_click(now);

        assert_eq!(patch.total_clicks, 6);
        assert_eq!(patch.last_hour_clicks, 1);
        assert_eq!(patch.last_day_clicks, 1);
        assert_eq!(patch.last_hour_window_start, Some(now));
        assert_eq!(patch.last_day_window_start, Some(now));
    }

    #[test]
    fn test_window_counts_never_exceed_total() {
        let start = Utc::now();
        let mut stat = statistic(1, 1, 1, Some(start), Some(start));

        for minutes in [10i64, 30, 70, 90, 60 * 26, 60 * 26 + 30] {
            let now = start + Duration::minutes(minutes);
            let patch = stat.apply_click(now);

            assert!(patch.total_clicks >= patch.last_hour_clicks);
            assert!(patch.total_clicks >= patch.last_day_clicks);
            assert!(patch.total_clicks > stat.total_clicks);

            stat.total_clicks = patch.total_clicks;
            stat.last_hour_clicks = patch.last_hour_clicks;
            stat.last_day_clicks = patch.last_day_clicks;
            if let Some(s) = patch.last_hour_window_start {
                stat.last_hour_window_start = Some(s);
            }
            if let Some(s) = patch.last_day_window_start {
                stat.last_day_window_start = Some(s);
            }
            stat.last_clicked_at = Some(patch.last_clicked_at);
        }
    }
}
