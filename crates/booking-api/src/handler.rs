use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use token_gate::Identity;

use crate::error::ApiResult;
use crate::model::{AvailabilityQuery, AvailabilityResponse};
use crate::state::AppState;

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub async fn show_availability(
    Extension(identity): Extension<Identity>,
    State(state): State<AppState>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> ApiResult<Json<AvailabilityResponse>> {
    // An unmappable query string (a repeated `startTime`, say) gets the same
    // JSON 400 as a bad window.
    let Query(query) = query?;

    tracing::info!(
        user.id = identity.id,
        start_time = query.start_time.as_deref(),
        end_time = query.end_time.as_deref(),
        "availability requested"
    );

    state
        .engine()
        .check(query.start_time.as_deref(), query.end_time.as_deref())
        .await
        .map(AvailabilityResponse::from)
        .map(Json)
        .map_err(Into::into)
}

pub async fn show_me(Extension(identity): Extension<Identity>) -> Json<Identity> {
    Json(identity)
}
