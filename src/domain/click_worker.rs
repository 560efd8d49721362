//! Background worker draining the click queue.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::StatisticService;
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::StatisticRepository;

/// Consumes click events and records them through the statistics service.
///
/// Failures are logged and dropped; statistics recording is best-effort
/// and never retried synchronously. Running as the channel's single
/// consumer also funnels all counter updates through one task, which keeps
/// the read-modify-write race window to concurrent processes only.
pub async fn run_click_worker<R: StatisticRepository>(
    mut rx: mpsc::Receiver<ClickEvent>,
    statistics: Arc<StatisticService<R>>,
) {
    while let Some(event) = rx.recv().await {
        if let Err(e) = statistics.record_click(event.alias_id).await {
            tracing::error!(alias_id = event.alias_id, error = %e, "failed to record click");
        }
    }

    tracing::info!("click worker stopped: channel closed");
}
