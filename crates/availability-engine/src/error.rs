//! Error types for availability lookups.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    /// One or both window endpoints were not supplied.
    #[error("Start and end time is required")]
    MissingParameter,

    /// An endpoint did not parse, or the window is empty or inverted.
    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),

    /// The resource store failed to answer a query.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

/// Failure reported by an [`AvailabilityStore`](crate::store::AvailabilityStore)
/// implementation.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AvailabilityError>;
