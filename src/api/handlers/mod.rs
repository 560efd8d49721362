//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod accounts;
pub mod aliases;
pub mod health;
pub mod redirect;
pub mod statistics;

pub use accounts::register_handler;
pub use aliases::{create_alias_handler, deactivate_alias_handler, list_aliases_handler};
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use statistics::statistics_handler;
