//! Bearer header parsing and signed-token verification.
//!
//! The verifier is built once from the process secret and shared read-only
//! across requests. Each call is independent: it either yields an [`Identity`]
//! or a [`GateError`], with no retries and no stored state.
//!
//! Time-based checks take an explicit `now`, so the outcome is a pure function
//! of `(token, secret, now)`. [`TokenVerifier::authenticate`] supplies the wall
//! clock.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use crate::claims::{Claims, Identity};
use crate::error::{GateError, Result};

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenVerifier").finish_non_exhaustive()
    }
}

impl TokenVerifier {
    /// Build a verifier for HMAC-signed tokens (HS256, HS384, HS512).
    ///
    /// # Errors
    /// Returns `GateError::MissingSecret` if `secret` is empty.
    pub fn new(secret: &str) -> Result<Self> {
        if secret.is_empty() {
            return Err(GateError::MissingSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // exp/nbf are checked against the caller's clock in `verify_token_at`.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();
        validation.leeway = 0;

        Ok(Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Authenticate a raw `Authorization` header value against the wall clock.
    ///
    /// # Errors
    /// See [`TokenVerifier::authenticate_at`].
    pub fn authenticate(&self, header: Option<&str>) -> Result<Identity> {
        self.authenticate_at(header, Utc::now())
    }

    /// Authenticate a raw `Authorization` header value as of `now`.
    ///
    /// # Errors
    /// - `GateError::MissingOrMalformedCredential` if the header is absent or
    ///   does not start with `"Bearer "`
    /// - `GateError::InvalidOrExpiredCredential` if the token fails verification
    pub fn authenticate_at(&self, header: Option<&str>, now: DateTime<Utc>) -> Result<Identity> {
        let token = bearer_token(header)?;
        self.verify_token_at(token, now)
    }

    /// Verify a bare token as of `now` and extract its identity.
    ///
    /// # Errors
    /// Returns `GateError::InvalidOrExpiredCredential` on a bad signature, a
    /// disallowed algorithm, a malformed token, a payload without integer `id`
    /// and string `email`, `now >= exp`, or `now < nbf`.
    pub fn verify_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<Identity> {
        let claims = jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation)
            .map_err(|e| reject(&e.to_string()))?
            .claims;

        let now = now.timestamp();
        if claims.exp.is_some_and(|exp| now >= exp) {
            return Err(reject("token expired"));
        }
        if claims.nbf.is_some_and(|nbf| now < nbf) {
            return Err(reject("token not yet valid"));
        }

        Ok(Identity::from(claims))
    }
}

/// Extract the token from a `Bearer <token>` header value.
///
/// The token is the second space-separated item, so `"Bearer  abc"` (two
/// spaces) yields an empty token that later fails verification.
///
/// # Errors
/// Returns `GateError::MissingOrMalformedCredential` if the header is absent
/// or uses another scheme.
pub fn bearer_token(header: Option<&str>) -> Result<&str> {
    match header {
        Some(value) if value.starts_with(BEARER_PREFIX) => {
            Ok(value.split(' ').nth(1).unwrap_or_default())
        }
        _ => Err(GateError::MissingOrMalformedCredential),
    }
}

fn reject(reason: &str) -> GateError {
    tracing::debug!(reason, "rejecting bearer token");
    GateError::InvalidOrExpiredCredential
}
