use crate::models::PageResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET / handler - Landing page
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Home page", body = PageResponse)
    ),
    tag = "pages"
)]
pub async fn home_handler() -> (StatusCode, Json<PageResponse>) {
    (
        StatusCode::OK,
        Json(PageResponse {
            page: "home".to_string(),
        }),
    )
}
