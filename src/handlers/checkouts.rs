use crate::models::PageResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /checkouts handler - Checkout page
#[utoipa::path(
    get,
    path = routes::CHECKOUTS,
    responses(
        (status = 200, description = "Checkout page", body = PageResponse)
    ),
    tag = "pages"
)]
pub async fn checkouts_handler() -> (StatusCode, Json<PageResponse>) {
    (
        StatusCode::OK,
        Json(PageResponse {
            page: "checkouts".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_checkouts_endpoint() {
        let app = Router::new().route(crate::routes::CHECKOUTS, get(checkouts_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/checkouts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page: PageResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(page.page, "checkouts");
    }
}
