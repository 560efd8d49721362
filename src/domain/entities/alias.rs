//! Alias entity: the mapping from a short code to a target URL.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A persisted URL alias.
///
/// `short_code` is absent between the two phases of creation: the row is
/// persisted first to obtain its identifier, then the code derived from
/// that identifier is attached. A code-less row is unreachable by redirect.
#[derive(Debug, Clone, FromRow)]
pub struct Alias {
    pub id: i64,
    pub target_url: String,
    pub short_code: Option<String>,
    pub owner_id: Option<i64>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Alias {
    /// Returns true if the alias has passed its expiry time at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e <= now)
    }

    /// Evaluates the activation predicate at `now`.
    ///
    /// An alias is active when it is manually enabled and not expired.
    /// The result is never stored; it is computed at read time.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.is_enabled && !self.is_expired_at(now)
    }

    /// Evaluates the activation predicate against the current time.
    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }
}

/// Input data for the pre-code phase of alias creation.
#[derive(Debug, Clone)]
pub struct NewAlias {
    pub target_url: String,
    pub owner_id: Option<i64>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn alias(enabled: bool, expires_at: Option<DateTime<Utc>>) -> Alias {
        let now = Utc::now();
        Alias {
            id: 1,
            target_url: "https://example.com/x".to_string(),
            short_code: Some("1IzyDeodHmT".to_string()),
            owner_id: Some(7),
            expires_at,
            is_enabled: enabled,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_enabled_without_expiry_is_active() {
        assert!(alias(true, None).is_active());
    }

    #[test]
    fn test_disabled_is_inactive_even_without_expiry() {
        assert!(!alias(false, None).is_active());
    }

    #[test]
    fn test_expired_is_inactive_even_when_enabled() {
        let past = Utc::now() - Duration::hours(1);
        assert!(!alias(true, Some(past)).is_active());
    }

    #[test]
    fn test_future_expiry_is_active() {
        let future = Utc::now() + Duration::hours(1);
        assert!(alias(true, Some(future)).is_active());
    }

    #[test]
    fn test_disabled_and_expired_is_inactive() {
        let past = Utc::now() - Duration::hours(1);
        assert!(!alias(false, Some(past)).is_active());
    }

    #[test]
    fn test_expiry_boundary_at_now() {
        let a = alias(true, Some(Utc::now()));
        let now = a.expires_at.unwrap();
        assert!(a.is_expired_at(now));
        assert!(!a.is_active_at(now));
    }
}
