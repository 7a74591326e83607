//! Error types for credential verification.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// The verifier was built without a signing secret.
    #[error("token verification secret is not configured")]
    MissingSecret,

    /// No `Authorization` header, or one without the `Bearer ` scheme.
    #[error("Access denied. No token provided or token format is incorrect.")]
    MissingOrMalformedCredential,

    /// Bad signature, expired, not yet valid, or an unusable payload.
    #[error("Invalid or expired token.")]
    InvalidOrExpiredCredential,
}

pub type Result<T> = std::result::Result<T, GateError>;
