//! The bearer-token gate in front of every `/api` route.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiResult;
use crate::state::AppState;

/// Verify the `Authorization` header and attach the caller's
/// [`Identity`](token_gate::Identity) to the request extensions.
///
/// Short-circuits with 401 on any rejection. A header that is not valid
/// visible ASCII is treated as absent.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> ApiResult<Response> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let identity = state.verifier().authenticate(header)?;
    tracing::debug!(user.id = identity.id, "authenticated request");

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}
