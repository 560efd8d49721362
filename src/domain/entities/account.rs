//! Account entity owning aliases.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A registered account. Aliases may also be anonymous (no owner).
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Input data for registering an account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password_hash: String,
}
