//! HS256 access tokens.
//!
//! Tokens carry [`AccessClaims`] with RFC 3339 timestamps, so the registered
//! `exp` claim is not used; expiry is checked by [`AccessClaims::check`] against
//! an explicit clock.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use thiserror::Error;

use bookstore_core::Username;

use crate::claims::{AccessClaims, TokenValidationError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token is malformed: {0}")]
    Malformed(String),

    #[error(transparent)]
    Claims(#[from] TokenValidationError),

    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Mints access tokens for authenticated users.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, subject: &Username, now: DateTime<Utc>) -> Result<String, TokenError>;
}

/// Verifies a token and returns its claims.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, TokenError>;
}

/// Shared-secret HS256 issuer and validator.
pub struct Hs256Jwt {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl Hs256Jwt {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }
}

impl TokenIssuer for Hs256Jwt {
    fn issue(&self, subject: &Username, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = AccessClaims::new(subject.clone(), now, self.ttl);
        tracing::debug!(%subject, expires_at = %claims.expires_at, "issuing access token");
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }
}

impl JwtValidator for Hs256Jwt {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, TokenError> {
        let data = jsonwebtoken::decode::<AccessClaims>(token, &self.decoding, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e.to_string()),
            })?;

        data.claims.check(now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Username {
        Username::parse("alice").unwrap()
    }

    #[test]
    fn issued_token_validates_to_its_subject() {
        let jwt = Hs256Jwt::new(b"test-secret", Duration::hours(1));
        let now = Utc::now();

        let token = jwt.issue(&alice(), now).unwrap();
        let claims = jwt.validate(&token, now + Duration::minutes(30)).unwrap();

        assert_eq!(claims.sub, alice());
        assert_eq!(claims.expires_at, now + Duration::hours(1));
    }

    #[test]
    fn token_is_rejected_after_its_lifetime() {
        let jwt = Hs256Jwt::new(b"test-secret", Duration::hours(1));
        let now = Utc::now();
        let token = jwt.issue(&alice(), now).unwrap();

        let err = jwt.validate(&token, now + Duration::hours(2)).unwrap_err();
        assert!(matches!(err, TokenError::Claims(TokenValidationError::Expired { .. })));
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let issuer = Hs256Jwt::new(b"secret-a", Duration::hours(1));
        let validator = Hs256Jwt::new(b"secret-b", Duration::hours(1));
        let now = Utc::now();
        let token = issuer.issue(&alice(), now).unwrap();

        assert_eq!(validator.validate(&token, now).unwrap_err(), TokenError::InvalidSignature);
    }

    #[test]
    fn garbage_is_malformed() {
        let jwt = Hs256Jwt::new(b"test-secret", Duration::hours(1));
        assert!(matches!(
            jwt.validate("not-a-token", Utc::now()),
            Err(TokenError::Malformed(_))
        ));
    }
}
