//! # booking-api
//!
//! HTTP boundary for court, coach and equipment availability.
//!
//! - `GET /health`: liveness probe, unauthenticated
//! - `GET /api/availability?startTime=..&endTime=..`: what is free in the window
//! - `GET /api/me`: the identity attached by the bearer gate
//!
//! Every `/api` route sits behind [`middleware::require_bearer`]. Errors are
//! JSON `{"message": ...}` bodies: 400 for bad windows, 401 for rejected
//! credentials, 500 for store failures (cause logged, never returned).

pub mod error;
pub mod handler;
pub mod middleware;
pub mod model;
pub mod route;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use route::build_app;
pub use state::AppState;
