use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{Method, Uri},
    response::Response,
};

/// Fallback handler that sends every request through the route table
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, ApiError> {
    let route = state
        .routes
        .resolve(&method, uri.path())
        .inspect_err(|err| tracing::info!("{}", err))?;

    tracing::debug!(handler = %route.handler, "Matched {} {}", method, route.pattern);

    handlers::invoke(route.handler).await
}
