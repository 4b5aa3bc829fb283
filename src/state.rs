use crate::config::Config;
use crate::routes::RouteTable;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub config: Arc<Config>,
}
