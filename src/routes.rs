// Route table - single source of truth for every path the service answers

use std::collections::HashSet;
use std::fmt;

use anyhow::{bail, Result};
use axum::http::Method;

pub const HEALTH: &str = "/up";
pub const ROOT: &str = "/";
pub const CHECKOUTS: &str = "/checkouts";

pub const HEALTH_ROUTE_NAME: &str = "rails_health_check";
pub const ROOT_ROUTE_NAME: &str = "root";

/// Identifier of the code bound to a route, written `resource#action`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId {
    resource: &'static str,
    action: &'static str,
}

impl HandlerId {
    pub const fn new(resource: &'static str, action: &'static str) -> Self {
        Self { resource, action }
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.resource, self.action)
    }
}

/// A binding from an HTTP method and literal path to a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub pattern: &'static str,
    pub handler: HandlerId,
    pub name: Option<&'static str>,
}

impl Route {
    pub fn get(pattern: &'static str, handler: HandlerId) -> Self {
        Route {
            method: Method::GET,
            pattern,
            handler,
            name: None,
        }
    }

    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// HEAD requests are answered by GET routes; everything else must match exactly.
    fn accepts(&self, method: &Method) -> bool {
        self.method == *method || (*method == Method::HEAD && self.method == Method::GET)
    }
}

/// Raised when no route matches an inbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNotFound {
    pub method: Method,
    pub path: String,
}

impl fmt::Display for RouteNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No route matches [{}] \"{}\"", self.method, self.path)
    }
}

impl std::error::Error for RouteNotFound {}

/// Ordered, immutable route table
///
/// Routes are checked in declaration order and the first match wins. The table
/// is built once at startup and only read afterwards, so it can be shared
/// between request tasks behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Result<Self> {
        let mut names = HashSet::new();
        for route in &routes {
            if !route.pattern.starts_with('/') {
                bail!(
                    "route pattern '{}' for {} must start with '/'",
                    route.pattern,
                    route.handler
                );
            }
            if let Some(name) = route.name {
                if !names.insert(name) {
                    bail!("route name '{}' is already in use", name);
                }
            }
        }
        Ok(RouteTable { routes })
    }

    /// The application's routes
    pub fn application() -> Result<Self> {
        RouteTable::new(vec![
            Route::get(HEALTH, HandlerId::new("health", "show")).named(HEALTH_ROUTE_NAME),
            Route::get(ROOT, HandlerId::new("static", "home")).named(ROOT_ROUTE_NAME),
            Route::get(CHECKOUTS, HandlerId::new("checkouts", "show")),
        ])
    }

    pub fn resolve(&self, method: &Method, path: &str) -> Result<&Route, RouteNotFound> {
        self.routes
            .iter()
            .find(|route| route.pattern == path && route.accepts(method))
            .ok_or_else(|| RouteNotFound {
                method: method.clone(),
                path: path.to_string(),
            })
    }

    pub fn route_named(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == Some(name))
    }

    pub fn path_for(&self, name: &str) -> Option<&'static str> {
        self.route_named(name).map(|route| route.pattern)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn log_startup(&self) {
        tracing::info!("Routes loaded:");
        for route in &self.routes {
            tracing::info!(
                "  {} {} => {}{}",
                route.method,
                route.pattern,
                route.handler,
                route.name.map(|n| format!(" ({})", n)).unwrap_or_default()
            );
        }
    }
}
