use crate::api_doc::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use crate::dispatch::dispatch;
use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build the service router
///
/// All application paths go through the route table via the fallback
/// dispatcher. Swagger UI is only mounted when enabled in config.
pub fn build_app(state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new();

    if state.config.api_docs_enabled {
        router = router.merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()));
    }

    router
        .fallback(dispatch)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
