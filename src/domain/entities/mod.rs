//! Core business entities.
//!
//! Entities are plain data structures with read-time predicates; all
//! persistence goes through the repository traits in
//! [`crate::domain::repositories`].

pub mod account;
pub mod alias;
pub mod statistic;

pub use account::{Account, NewAccount};
pub use alias::{Alias, NewAlias};
pub use statistic::{ClickStatistic, NewStatistic, StatisticPatch};
