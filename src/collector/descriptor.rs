use crate::controller::Handler;
use axum::http::Method;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One endpoint candidate found on a controller.
pub struct RouteDescriptor<C> {
    /// Sub-path of the handler; `None` when it carries no verb annotation.
    pub path: Option<String>,
    /// Verb of the handler; `None` when it carries no verb annotation.
    pub method: Option<Method>,
    pub handler: Handler<C>,
    pub handler_name: &'static str,
}

impl<C> RouteDescriptor<C> {
    /// Whether the handler carries a verb annotation.
    pub fn is_routable(&self) -> bool {
        self.method.is_some()
    }

    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            controller: self.handler.id().controller().name().to_string(),
            handler_name: self.handler_name.to_string(),
            path: self.path.clone(),
            method: self.method.as_ref().map(|m| m.as_str().to_string()),
        }
    }
}

// `C` is not required to implement any of these.
impl<C> Clone for RouteDescriptor<C> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            method: self.method.clone(),
            handler: self.handler,
            handler_name: self.handler_name,
        }
    }
}

impl<C> PartialEq for RouteDescriptor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && self.method == other.method
            && self.handler == other.handler
            && self.handler_name == other.handler_name
    }
}

impl<C> Eq for RouteDescriptor<C> {}

impl<C> fmt::Debug for RouteDescriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("path", &self.path)
            .field("method", &self.method)
            .field("handler", &self.handler)
            .field("handler_name", &self.handler_name)
            .finish()
    }
}

/// Serializable form of a [`RouteDescriptor`], for handing routes to a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub controller: String,
    pub handler_name: String,
    pub path: Option<String>,
    pub method: Option<String>,
}
