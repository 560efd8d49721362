//! Repository trait for alias data access.

use crate::domain::entities::{Alias, NewAlias};
use crate::error::AppError;
use crate::utils::short_code::CodeError;
use async_trait::async_trait;

/// Repository interface for URL aliases.
///
/// Deliberately narrow: only the operations the lifecycle manager needs,
/// no generic update/filter primitives.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAliasRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// Creates an alias and attaches its derived short code.
    ///
    /// Two phases in one logical transaction: persist the pre-code row to
    /// obtain the identifier, then derive the code with `derive_code` and
    /// attach it. Implementations must not leave a committed code-less row
    /// when the second phase fails.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CreationIncomplete`] if the identifier was
    /// assigned but the code could not be derived or attached.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_with_code(
        &self,
        new_alias: NewAlias,
        derive_code: fn(i64) -> Result<String, CodeError>,
    ) -> Result<Alias, AppError>;

    /// Finds an alias by its stored short code.
    ///
    /// No activation check; the caller evaluates the predicate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Alias>, AppError>;

    /// Finds an alias by short code only if it belongs to `owner_id`.
    ///
    /// A foreign owner yields `Ok(None)`, indistinguishable from a missing
    /// code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code_and_owner(
        &self,
        code: &str,
        owner_id: i64,
    ) -> Result<Option<Alias>, AppError>;

    /// Lists an owner's aliases, newest first, with offset pagination.
    ///
    /// With `active_only`, the enabled-and-not-expired predicate is applied
    /// at query time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_owner(
        &self,
        owner_id: i64,
        active_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Alias>, AppError>;

    /// Sets the manual enabled flag on an alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no alias has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_enabled(&self, id: i64, enabled: bool) -> Result<Alias, AppError>;
}
