use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{HealthResponse, PageResponse};

pub const SWAGGER_UI_PATH: &str = "/swagger-ui";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "checkouts-web API",
        version = "1.0.0",
        description = "Storefront routes: health check, home page and checkout page"
    ),
    paths(
        handlers::health::health_handler,
        handlers::home::home_handler,
        handlers::checkouts::checkouts_handler
    ),
    components(
        schemas(
            HealthResponse,
            PageResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "pages", description = "Page endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::RouteTable;

    #[test]
    fn test_every_route_documented() {
        let doc = ApiDoc::openapi();
        let routes = RouteTable::application().unwrap();

        assert_eq!(doc.paths.paths.len(), routes.len());
        for route in routes.iter() {
            assert!(
                doc.paths.paths.contains_key(route.pattern),
                "missing docs for {}",
                route.pattern
            );
        }
    }
}
