//! Controllers and their prototypes.
//!
//! A controller is any type whose method members are listed by a
//! [`Prototype`]. The `#[routes]` macro implements [`Controller`], and
//! `#[controller(path = "..")]` adds a base path to it. Both can also be
//! written by hand:
//!
//! ```rust
//! use routemark::prelude::*;
//!
//! struct Health;
//!
//! impl Health {
//!     fn check(&self) -> &'static str {
//!         "ok"
//!     }
//! }
//!
//! fn check(this: &Health) -> HandlerFuture<'_> {
//!     let body = this.check();
//!     Box::pin(async move { body.into_response() })
//! }
//!
//! impl Controller for Health {
//!     fn prototype() -> Prototype<Self> {
//!         Prototype::<Self>::builder().method("check", check).build()
//!     }
//!
//!     fn annotate(store: &MetadataStore) -> routemark::Result<()> {
//!         register_controller::<Self>(store, "/health");
//!         register_route::<Self>(store, "check", "GET", "/")
//!     }
//! }
//! ```

mod handler;
mod prototype;

pub use handler::{Handler, HandlerFn, HandlerFuture};
pub use prototype::{Prototype, PrototypeBuilder};

use crate::error::Result;
use crate::metadata::MetadataStore;

/// Base path of a type without a `#[controller(path = "..")]` marker.
///
/// `#[controller]` emits an inherent `base_path()`, which takes precedence
/// over this one where `#[routes]` reads it.
#[doc(hidden)]
pub trait UnmarkedController {
    fn base_path() -> Option<&'static str> {
        None
    }
}

impl<T: ?Sized> UnmarkedController for T {}

/// A type whose method members can be collected as routes.
pub trait Controller: Send + Sync + Sized + 'static {
    /// Own method members, in declaration order.
    fn prototype() -> Prototype<Self>;

    /// Attaches the class marker and every method annotation to `store`.
    ///
    /// # Errors
    /// Returns an error if an annotation names an invalid HTTP verb.
    fn annotate(store: &MetadataStore) -> Result<()>;
}
