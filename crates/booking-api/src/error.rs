//! HTTP mapping for availability and authentication failures.

use availability_engine::AvailabilityError;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use token_gate::GateError;

use crate::model::MessageResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Availability(#[from] AvailabilityError),

    #[error(transparent)]
    Unauthorized(#[from] GateError),

    #[error("malformed query string: {0}")]
    MalformedQuery(#[from] QueryRejection),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// - Missing parameter / invalid range / malformed query: 400 Bad Request
    /// - Store failure: 500 Internal Server Error
    /// - Any credential rejection: 401 Unauthorized
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Availability(
                AvailabilityError::MissingParameter | AvailabilityError::InvalidTimeRange(_),
            )
            | Self::MalformedQuery(_) => StatusCode::BAD_REQUEST,
            Self::Availability(AvailabilityError::StoreUnavailable(_))
            | Self::Unauthorized(GateError::MissingSecret) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    /// Caller-facing text. Never carries store or verification internals.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Availability(AvailabilityError::MissingParameter) => {
                "Start and end time is required"
            }
            Self::Availability(AvailabilityError::InvalidTimeRange(_))
            | Self::MalformedQuery(_) => "Invalid time range",
            Self::Availability(AvailabilityError::StoreUnavailable(_))
            | Self::Unauthorized(GateError::MissingSecret) => "Internal server error",
            Self::Unauthorized(GateError::MissingOrMalformedCredential) => {
                "Access denied. No token provided or token format is incorrect."
            }
            Self::Unauthorized(GateError::InvalidOrExpiredCredential) => {
                "Invalid or expired token."
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error.message = %self, "request failed");
        } else {
            tracing::debug!(error.message = %self, status = status.as_u16(), "request rejected");
        }

        (status, Json(MessageResponse::new(self.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use availability_engine::StoreError;

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::from(AvailabilityError::MissingParameter).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(AvailabilityError::InvalidTimeRange("x".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(AvailabilityError::StoreUnavailable(StoreError::new("down")))
                .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(GateError::MissingOrMalformedCredential).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(GateError::InvalidOrExpiredCredential).status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn store_cause_is_not_exposed() {
        let err = ApiError::from(AvailabilityError::StoreUnavailable(StoreError::new(
            "password authentication failed for user \"bookings\"",
        )));
        assert_eq!(err.public_message(), "Internal server error");
    }
}
