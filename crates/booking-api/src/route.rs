use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

use crate::handler::{health_check, show_availability, show_me};
use crate::middleware::require_bearer;
use crate::state::AppState;

pub fn build_health_check_routers() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Authenticated routes, nested under `/api`.
pub fn build_api_routers(state: AppState) -> Router<AppState> {
    let routers = Router::new()
        .route("/availability", get(show_availability))
        .route("/me", get(show_me))
        .route_layer(from_fn_with_state(state, require_bearer));

    Router::new().nest("/api", routers)
}

/// The complete application with request tracing.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(build_health_check_routers())
        .merge(build_api_routers(state.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(state)
}
