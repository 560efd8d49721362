//! Authentication service: the oracle mapping credentials to a principal.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{Account, NewAccount};
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Service registering accounts and verifying Basic credentials.
///
/// Passwords are hashed with HMAC-SHA256 keyed by `signing_secret` before
/// storage and comparison. An attacker with read-only database access
/// cannot verify or forge credentials without the server-side secret.
pub struct AuthService<R: AccountRepository> {
    repository: Arc<R>,
    signing_secret: String,
}

impl<R: AccountRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// `signing_secret` must match the value used when existing accounts
    /// were registered.
    pub fn new(repository: Arc<R>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Hashes a raw password with HMAC-SHA256 under the signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_password(&self, password: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(password.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn register(&self, username: &str, password: &str) -> Result<Account, AppError> {
        if self.repository.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict(
                "Username already exists",
                json!({ "username": username }),
            ));
        }

        let account = self
            .repository
            .create(NewAccount {
                username: username.to_string(),
                password_hash: self.hash_password(password),
            })
            .await?;

        tracing::info!(account_id = account.id, username, "registered account");

        Ok(account)
    }

    /// Authenticates credentials and returns the active principal.
    ///
    /// Unknown username, wrong password, and deactivated account all
    /// produce the same rejection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on rejection,
    /// [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Account, AppError> {
        let rejection = || {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid credentials" }),
            )
        };

        let Some(account) = self.repository.find_by_username(username).await? else {
            return Err(rejection());
        };

        if !account.is_active || account.password_hash != self.hash_password(password) {
            return Err(rejection());
        }

        Ok(account)
    }
}
