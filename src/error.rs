use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::routes::{HandlerId, RouteNotFound};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Every failure the dispatcher can produce ends up here and is rendered as a
/// JSON body with the matching HTTP status code.
#[derive(Debug)]
pub enum ApiError {
    /// No route matches the request method and path
    RouteNotFound(RouteNotFound),
    /// A route points at a handler with no implementation
    UnknownHandler(HandlerId),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::RouteNotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            ApiError::UnknownHandler(handler) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("No handler registered for {}", handler),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<RouteNotFound> for ApiError {
    fn from(err: RouteNotFound) -> Self {
        ApiError::RouteNotFound(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;

    async fn render(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_route_not_found_is_404() {
        let err: ApiError = RouteNotFound {
            method: Method::POST,
            path: "/up".to_string(),
        }
        .into();

        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "No route matches [POST] \"/up\"");
    }

    #[tokio::test]
    async fn test_unknown_handler_is_500() {
        let (status, body) = render(ApiError::UnknownHandler(HandlerId::new("orders", "index"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.error.contains("orders#index"));
    }
}
