//! Application services orchestrating domain entities and repositories.

pub mod alias_service;
pub mod auth_service;
pub mod redirect_service;
pub mod statistic_service;

pub use alias_service::{AliasService, CreateAlias};
pub use auth_service::AuthService;
pub use redirect_service::RedirectService;
pub use statistic_service::StatisticService;
