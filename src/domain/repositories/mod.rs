//! Repository trait definitions for the domain layer.
//!
//! Each entity gets a narrow interface exposing only the operations the
//! services need; concrete implementations live in
//! `crate::infrastructure::persistence`, and `mockall` generates test
//! doubles under `cfg(test)`.
//!
//! # Available Repositories
//!
//! - [`AliasRepository`] - Alias lifecycle operations
//! - [`StatisticRepository`] - Click counter rows and summaries
//! - [`AccountRepository`] - Account registration and lookup

pub mod account_repository;
pub mod alias_repository;
pub mod statistic_repository;

pub use account_repository::AccountRepository;
pub use alias_repository::AliasRepository;
pub use statistic_repository::{AliasClickSummary, SortOrder, StatisticRepository};

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use alias_repository::MockAliasRepository;
#[cfg(test)]
pub use statistic_repository::MockStatisticRepository;
