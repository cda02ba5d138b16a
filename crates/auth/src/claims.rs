use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bookstore_core::Username;

/// Access token claims (transport-agnostic).
///
/// The subject is the only identity the service trusts once the token's
/// signature has been verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the logged-in username.
    pub sub: Username,

    /// Issued-at timestamp.
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl AccessClaims {
    pub fn new(sub: Username, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub,
            issued_at,
            expires_at: issued_at + ttl,
        }
    }

    /// Accept the claims only while `issued_at <= now < expires_at`.
    ///
    /// Signatures are checked by [`crate::token`] before this runs.
    pub fn check(&self, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
        let lifetime = self.issued_at..self.expires_at;
        if lifetime.is_empty() {
            Err(TokenValidationError::EmptyLifetime)
        } else if now < lifetime.start {
            Err(TokenValidationError::IssuedInFuture)
        } else if lifetime.contains(&now) {
            Ok(())
        } else {
            Err(TokenValidationError::Expired {
                expired_at: self.expires_at,
            })
        }
    }
}

/// Why otherwise well-signed claims were refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("access token expired at {expired_at}")]
    Expired { expired_at: DateTime<Utc> },

    #[error("access token was issued in the future")]
    IssuedInFuture,

    #[error("access token lifetime is empty")]
    EmptyLifetime,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Username {
        Username::parse("alice").unwrap()
    }

    #[test]
    fn accepted_for_the_whole_lifetime() {
        let now = Utc::now();
        let claims = AccessClaims::new(alice(), now, Duration::hours(1));
        assert_eq!(claims.check(now), Ok(()));
        assert_eq!(claims.check(now + Duration::minutes(59)), Ok(()));
    }

    #[test]
    fn refused_from_expires_at_onwards() {
        let now = Utc::now();
        let claims = AccessClaims::new(alice(), now, Duration::hours(1));
        assert_eq!(
            claims.check(now + Duration::hours(1)),
            Err(TokenValidationError::Expired {
                expired_at: now + Duration::hours(1)
            })
        );
    }

    #[test]
    fn future_issue_and_empty_lifetime_are_refused() {
        let now = Utc::now();
        let future = AccessClaims::new(alice(), now + Duration::minutes(5), Duration::hours(1));
        assert_eq!(future.check(now), Err(TokenValidationError::IssuedInFuture));

        let empty = AccessClaims::new(alice(), now, Duration::zero());
        assert_eq!(empty.check(now), Err(TokenValidationError::EmptyLifetime));
    }
}
