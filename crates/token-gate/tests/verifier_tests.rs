//! Tests for bearer-header authentication.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use proptest::prelude::*;
use serde_json::{json, Value};
use token_gate::{GateError, Identity, TokenVerifier};

// ── Helpers ─────────────────────────────────────────────────────────────────

const SECRET: &str = "test-secret-do-not-ship";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, 10, 0, 0).unwrap()
}

fn sign_with(alg: Algorithm, secret: &str, claims: &Value) -> String {
    encode(
        &Header::new(alg),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn sign(claims: &Value) -> String {
    sign_with(Algorithm::HS256, SECRET, claims)
}

fn verifier() -> TokenVerifier {
    TokenVerifier::new(SECRET).unwrap()
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn alice() -> Identity {
    Identity {
        id: 42,
        email: "alice@example.com".to_string(),
    }
}

// ── Header shape ────────────────────────────────────────────────────────────

#[test]
fn absent_header_is_missing_credential() {
    assert_eq!(
        verifier().authenticate_at(None, now()),
        Err(GateError::MissingOrMalformedCredential)
    );
}

#[test]
fn wrong_scheme_is_malformed_credential() {
    assert_eq!(
        verifier().authenticate_at(Some("Token abc123"), now()),
        Err(GateError::MissingOrMalformedCredential)
    );
}

#[test]
fn bare_scheme_without_space_is_malformed_credential() {
    assert_eq!(
        verifier().authenticate_at(Some("Bearer"), now()),
        Err(GateError::MissingOrMalformedCredential)
    );
}

#[test]
fn empty_token_is_invalid_credential() {
    assert_eq!(
        verifier().authenticate_at(Some("Bearer "), now()),
        Err(GateError::InvalidOrExpiredCredential)
    );
}

#[test]
fn garbage_token_is_invalid_credential() {
    assert_eq!(
        verifier().authenticate_at(Some("Bearer abc123"), now()),
        Err(GateError::InvalidOrExpiredCredential)
    );
}

// ── Successful verification ─────────────────────────────────────────────────

#[test]
fn valid_token_yields_identity() {
    let token = sign(&json!({
        "id": 42,
        "email": "alice@example.com",
        "exp": now().timestamp() + 3600,
    }));

    assert_eq!(
        verifier().authenticate_at(Some(&bearer(&token)), now()),
        Ok(alice())
    );
}

#[test]
fn token_without_expiry_is_accepted() {
    let token = sign(&json!({"id": 42, "email": "alice@example.com"}));

    assert_eq!(verifier().verify_token_at(&token, now()), Ok(alice()));
}

#[test]
fn extra_claims_are_dropped() {
    let token = sign(&json!({
        "id": 42,
        "email": "alice@example.com",
        "role": "admin",
        "iat": now().timestamp() - 10,
    }));

    let identity = verifier().verify_token_at(&token, now()).unwrap();
    assert_eq!(
        serde_json::to_value(identity).unwrap(),
        json!({"id": 42, "email": "alice@example.com"})
    );
}

#[test]
fn hs512_tokens_are_accepted() {
    let token = sign_with(
        Algorithm::HS512,
        SECRET,
        &json!({"id": 42, "email": "alice@example.com"}),
    );

    assert_eq!(verifier().verify_token_at(&token, now()), Ok(alice()));
}

#[test]
fn trailing_header_items_are_ignored() {
    let token = sign(&json!({"id": 42, "email": "alice@example.com"}));
    let header = format!("Bearer {token} trailing");

    assert_eq!(verifier().authenticate_at(Some(&header), now()), Ok(alice()));
}

// ── Rejections ──────────────────────────────────────────────────────────────

#[test]
fn expired_token_is_rejected() {
    let token = sign(&json!({
        "id": 42,
        "email": "alice@example.com",
        "exp": now().timestamp() - 1,
    }));

    assert_eq!(
        verifier().authenticate_at(Some(&bearer(&token)), now()),
        Err(GateError::InvalidOrExpiredCredential)
    );
}

#[test]
fn token_expiring_exactly_now_is_rejected() {
    let token = sign(&json!({"id": 42, "email": "alice@example.com", "exp": now().timestamp()}));

    assert_eq!(
        verifier().verify_token_at(&token, now()),
        Err(GateError::InvalidOrExpiredCredential)
    );
}

#[test]
fn token_not_yet_valid_is_rejected() {
    let token = sign(&json!({
        "id": 42,
        "email": "alice@example.com",
        "nbf": now().timestamp() + 60,
    }));

    assert_eq!(
        verifier().verify_token_at(&token, now()),
        Err(GateError::InvalidOrExpiredCredential)
    );
}

#[test]
fn token_signed_with_other_secret_is_rejected() {
    let token = sign_with(
        Algorithm::HS256,
        "someone-elses-secret",
        &json!({"id": 42, "email": "alice@example.com"}),
    );

    assert_eq!(
        verifier().verify_token_at(&token, now()),
        Err(GateError::InvalidOrExpiredCredential)
    );
}

#[test]
fn token_missing_email_is_rejected() {
    let token = sign(&json!({"id": 42}));

    assert_eq!(
        verifier().verify_token_at(&token, now()),
        Err(GateError::InvalidOrExpiredCredential)
    );
}

#[test]
fn token_with_string_id_is_rejected() {
    let token = sign(&json!({"id": "42", "email": "alice@example.com"}));

    assert_eq!(
        verifier().verify_token_at(&token, now()),
        Err(GateError::InvalidOrExpiredCredential)
    );
}

#[test]
fn tampered_payload_is_rejected() {
    let token = sign(&json!({"id": 42, "email": "alice@example.com"}));
    let forged = sign(&json!({"id": 1, "email": "admin@example.com"}));
    let mut parts: Vec<&str> = token.split('.').collect();
    parts[1] = forged.split('.').nth(1).unwrap();
    let tampered = parts.join(".");

    assert_eq!(
        verifier().verify_token_at(&tampered, now()),
        Err(GateError::InvalidOrExpiredCredential)
    );
}

#[test]
fn same_inputs_same_time_same_outcome() {
    let token = sign(&json!({
        "id": 42,
        "email": "alice@example.com",
        "exp": now().timestamp() + 5,
    }));
    let v = verifier();

    assert_eq!(
        v.verify_token_at(&token, now()),
        v.verify_token_at(&token, now())
    );
    assert!(v
        .verify_token_at(&token, now() + Duration::seconds(5))
        .is_err());
}

proptest! {
    /// An expired token rejects no matter how far past expiry we are.
    #[test]
    fn expired_always_rejects(secs_past in 0i64..10_000_000) {
        let exp = now().timestamp();
        let token = sign(&json!({"id": 7, "email": "bob@example.com", "exp": exp}));
        let at = now() + Duration::seconds(secs_past);
        prop_assert_eq!(
            verifier().verify_token_at(&token, at),
            Err(GateError::InvalidOrExpiredCredential)
        );
    }
}
