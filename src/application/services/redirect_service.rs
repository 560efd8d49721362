//! Redirect resolver: code lookup plus best-effort click recording.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::AliasService;
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;

/// Answers "where does this code go" for the redirect endpoint.
///
/// Composes the alias lifecycle check with click recording. Recording is
/// fire-and-forget: the event is handed to the click worker's queue and
/// any enqueue failure is logged, never surfaced. The redirect outcome is
/// decided before the event is enqueued, so a cancelled request or a
/// statistics outage cannot affect it.
pub struct RedirectService<R: AliasRepository> {
    aliases: Arc<AliasService<R>>,
    click_tx: mpsc::Sender<ClickEvent>,
}

impl<R: AliasRepository> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(aliases: Arc<AliasService<R>>, click_tx: mpsc::Sender<ClickEvent>) -> Self {
        Self { aliases, click_tx }
    }

    /// Resolves a short code to its target URL.
    ///
    /// Returns `Ok(None)` for unknown, disabled, and expired codes alike.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only for alias lookup failures;
    /// statistics failures never propagate.
    pub async fn resolve(&self, code: &str) -> Result<Option<String>, AppError> {
        let Some(alias) = self.aliases.get_active_by_code(code).await? else {
            return Ok(None);
        };

        if let Err(e) = self.click_tx.try_send(ClickEvent { alias_id: alias.id }) {
            // Queue full or worker gone; the redirect is served regardless.
            tracing::warn!(alias_id = alias.id, error = %e, "failed to enqueue click event");
        }

        Ok(Some(alias.target_url))
    }
}
