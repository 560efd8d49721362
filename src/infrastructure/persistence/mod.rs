//! PostgreSQL repository implementations.

pub mod pg_account_repository;
pub mod pg_alias_repository;
pub mod pg_statistic_repository;

pub use pg_account_repository::PgAccountRepository;
pub use pg_alias_repository::PgAliasRepository;
pub use pg_statistic_repository::PgStatisticRepository;
