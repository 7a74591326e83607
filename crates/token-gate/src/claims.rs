//! The identity extracted from a verified token.

use serde::{Deserialize, Serialize};

/// Who the caller is. Only `id` and `email` are trusted out of a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub email: String,
}

/// Payload fields read during verification.
///
/// `exp` and `nbf` are seconds since the epoch and are optional, as with any
/// signed token; when present they are enforced.
#[derive(Debug, Deserialize)]
pub(crate) struct Claims {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub nbf: Option<i64>,
}

impl From<Claims> for Identity {
    fn from(value: Claims) -> Self {
        Self {
            id: value.id,
            email: value.email,
        }
    }
}
