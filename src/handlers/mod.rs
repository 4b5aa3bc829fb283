pub mod health;
pub mod home;
pub mod checkouts;

pub use health::health_handler;
pub use home::home_handler;
pub use checkouts::checkouts_handler;

use crate::error::ApiError;
use crate::routes::{HandlerId, RouteTable};
use anyhow::{bail, Result};
use axum::response::{IntoResponse, Response};

pub const HEALTH_SHOW: HandlerId = HandlerId::new("health", "show");
pub const STATIC_HOME: HandlerId = HandlerId::new("static", "home");
pub const CHECKOUTS_SHOW: HandlerId = HandlerId::new("checkouts", "show");

const REGISTERED: [HandlerId; 3] = [HEALTH_SHOW, STATIC_HOME, CHECKOUTS_SHOW];

/// Run the handler bound to `handler`
pub async fn invoke(handler: HandlerId) -> Result<Response, ApiError> {
    let response = match handler {
        HEALTH_SHOW => health_handler().await.into_response(),
        STATIC_HOME => home_handler().await.into_response(),
        CHECKOUTS_SHOW => checkouts_handler().await.into_response(),
        _ => return Err(ApiError::UnknownHandler(handler)),
    };
    Ok(response)
}

/// Fail startup if any route points at a handler we can't run
pub fn ensure_registered(routes: &RouteTable) -> Result<()> {
    for route in routes.iter() {
        if !REGISTERED.contains(&route.handler) {
            bail!(
                "route {} {} points at unregistered handler {}",
                route.method,
                route.pattern,
                route.handler
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;
    use axum::http::StatusCode;

    #[test]
    fn test_application_handlers_registered() {
        let routes = RouteTable::application().unwrap();
        assert!(ensure_registered(&routes).is_ok());
    }

    #[test]
    fn test_unregistered_handler_rejected() {
        let routes = RouteTable::new(vec![Route::get("/orders", HandlerId::new("orders", "index"))]).unwrap();

        let error = ensure_registered(&routes).unwrap_err();
        assert!(error.to_string().contains("orders#index"));
    }

    #[tokio::test]
    async fn test_invoke_each_handler() {
        for handler in REGISTERED {
            let response = invoke(handler).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_invoke_unknown_handler() {
        let result = invoke(HandlerId::new("orders", "index")).await;
        assert!(matches!(result, Err(ApiError::UnknownHandler(_))));
    }
}
