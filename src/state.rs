//! Shared application state injected into handlers.

use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::mpsc;

use crate::application::services::{
    alias_service::AliasService, auth_service::AuthService, redirect_service::RedirectService,
    statistic_service::StatisticService,
};
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::persistence::{
    PgAccountRepository, PgAliasRepository, PgStatisticRepository,
};

/// Application state shared across all request handlers.
///
/// Cloning is cheap: every field is either a pool handle, a channel
/// sender, or an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub base_url: String,
    pub click_tx: mpsc::Sender<ClickEvent>,
    pub alias_service: Arc<AliasService<PgAliasRepository>>,
    pub statistic_service: Arc<StatisticService<PgStatisticRepository>>,
    pub redirect_service: Arc<RedirectService<PgAliasRepository>>,
    pub auth_service: Arc<AuthService<PgAccountRepository>>,
}

impl AppState {
    /// Wires repositories and services over the given pool.
    pub fn new(
        db: PgPool,
        base_url: String,
        click_tx: mpsc::Sender<ClickEvent>,
        signing_secret: String,
    ) -> Self {
        let pool = Arc::new(db.clone());

        let alias_repository = Arc::new(PgAliasRepository::new(pool.clone()));
        let account_repository = Arc::new(PgAccountRepository::new(pool.clone()));
        let statistic_repository = Arc::new(PgStatisticRepository::new(pool));

        let alias_service = Arc::new(AliasService::new(alias_repository));
        let statistic_service = Arc::new(StatisticService::new(statistic_repository));
        let redirect_service = Arc::new(RedirectService::new(
            alias_service.clone(),
            click_tx.clone(),
        ));
        let auth_service = Arc::new(AuthService::new(account_repository, signing_secret));

        Self {
            db,
            base_url,
            click_tx,
            alias_service,
            statistic_service,
            redirect_service,
            auth_service,
        }
    }
}
