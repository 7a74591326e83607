//! # token-gate
//!
//! Validates `Authorization: Bearer <token>` headers against a process-wide
//! HMAC secret and yields the caller's [`Identity`] (`id` and `email`).
//!
//! Every rejection is one of two variants, both meant to surface as a single
//! undifferentiated "unauthorized" outcome. The specific verification failure
//! is only logged at debug level.
//!
//! ## Modules
//!
//! - [`verifier`]: Header parsing and signature/expiry checks
//! - [`claims`]: The identity extracted from a verified payload
//! - [`error`]: Error types

pub mod claims;
pub mod error;
pub mod verifier;

pub use claims::Identity;
pub use error::GateError;
pub use verifier::{bearer_token, TokenVerifier};
