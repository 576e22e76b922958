//! # Routemark
//!
//! Metadata-driven route registration for controller types.
//!
//! Routes are described in two phases. At definition time, annotations record
//! a base path on a controller and a verb plus sub-path on each of its
//! handlers. Later, a [`RouteCollector`] walks an instance of the controller
//! and rebuilds the list of endpoints from that metadata.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use routemark::prelude::*;
//!
//! #[controller(path = "/test")]
//! pub struct SomeClass;
//!
//! #[routes]
//! impl SomeClass {
//!     #[get("/a")]
//!     fn some_get_method(&self) -> &'static str {
//!         "hello world"
//!     }
//!
//!     #[post("/b")]
//!     async fn some_post_method(&self) -> &'static str {
//!         "true"
//!     }
//! }
//!
//! let store = MetadataStore::new();
//! store.install::<SomeClass>()?;
//!
//! for route in RouteCollector::new(&store).collect(&SomeClass) {
//!     println!("{:?} {:?} -> {}", route.method, route.path, route.handler_name);
//! }
//! ```
//!
//! The base path and the handler paths are kept apart: `/test` and `/a` are
//! reported separately and never joined.

pub mod annotation;
pub mod collector;
pub mod controller;
pub mod error;
pub mod metadata;

// Re-export core types
pub use annotation::{
    ControllerMarker, MethodAnnotation, VerbAnnotator, make_verb_annotator, mark_controller,
    register_controller, register_route,
};
pub use collector::{CollectOptions, RouteCollector, RouteDescriptor, RouteSummary};
pub use controller::{Controller, Handler, HandlerFn, HandlerFuture, Prototype};
pub use error::{Result, RoutemarkError};
pub use metadata::{ControllerId, HandlerId, MetadataKind, MetadataStore, Subject};

// Re-export macros
pub use routemark_macro::{controller, delete, get, patch, post, put, route, routes};

// Re-export commonly used types from dependencies
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use routemark::prelude::*;
/// ```
pub mod prelude {
    pub use crate::annotation::{
        ControllerMarker, MethodAnnotation, VerbAnnotator, controller_path, make_verb_annotator,
        mark_controller, register_controller, register_route, route_method, route_path,
    };
    pub use crate::collector::{CollectOptions, RouteCollector, RouteDescriptor, RouteSummary};
    pub use crate::controller::{Controller, Handler, HandlerFn, HandlerFuture, Prototype};
    pub use crate::error::{Result, RoutemarkError};
    pub use crate::metadata::{ControllerId, HandlerId, MetadataKind, MetadataStore, Subject};
    pub use crate::{controller, delete, get, patch, post, put, route, routes};
    pub use axum::{
        http::Method,
        response::{IntoResponse, Response},
    };
}
