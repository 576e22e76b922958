//! Controller and method annotations.
//!
//! A [`ControllerMarker`] records a base path for a controller type; a
//! [`MethodAnnotation`] records a verb and a sub-path for one handler. Both
//! only write metadata and leave the annotated code untouched.

mod marker;
mod verb;

pub use marker::{ControllerMarker, mark_controller};
pub use verb::{MethodAnnotation, VerbAnnotator, delete, get, make_verb_annotator, patch, post, put};

use crate::error::Result;
use crate::metadata::{ControllerId, HandlerId, MetadataKind, MetadataStore};
use axum::http::Method;

/// Records `path` as the base path of controller `C`.
pub fn register_controller<C: 'static>(store: &MetadataStore, path: impl Into<String>) {
    mark_controller(path).apply::<C>(store);
}

/// Records `verb` and `path` for the member `member` of controller `C`.
///
/// # Errors
/// Returns [`RoutemarkError::InvalidVerb`](crate::RoutemarkError::InvalidVerb)
/// if `verb` is not a valid HTTP method token.
pub fn register_route<C: 'static>(
    store: &MetadataStore,
    member: &'static str,
    verb: &str,
    path: impl Into<String>,
) -> Result<()> {
    make_verb_annotator(verb)?
        .at(path)
        .apply(store, HandlerId::of::<C>(member));
    Ok(())
}

/// Base path recorded for controller `C`.
pub fn controller_path<C: 'static>(store: &MetadataStore) -> Option<String> {
    store.get(MetadataKind::Path, ControllerId::of::<C>())
}

/// Sub-path recorded for a handler.
pub fn route_path(store: &MetadataStore, handler: HandlerId) -> Option<String> {
    store.get(MetadataKind::Path, handler)
}

/// Verb recorded for a handler.
pub fn route_method(store: &MetadataStore, handler: HandlerId) -> Option<Method> {
    store.get(MetadataKind::Method, handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RoutemarkError;

    struct Accounts;

    #[test]
    fn test_register_controller() {
        let store = MetadataStore::new();
        register_controller::<Accounts>(&store, "/accounts");
        assert_eq!(controller_path::<Accounts>(&store).as_deref(), Some("/accounts"));
    }

    #[test]
    fn test_register_route() {
        let store = MetadataStore::new();
        register_route::<Accounts>(&store, "open", "POST", "/open").unwrap();

        let id = HandlerId::of::<Accounts>("open");
        assert_eq!(route_path(&store, id).as_deref(), Some("/open"));
        assert_eq!(route_method(&store, id), Some(Method::POST));
        // The controller itself carries no path.
        assert!(controller_path::<Accounts>(&store).is_none());
    }

    #[test]
    fn test_register_route_rejects_invalid_verb() {
        let store = MetadataStore::new();
        let err = register_route::<Accounts>(&store, "open", "NOT A VERB", "/open").unwrap_err();
        assert!(matches!(err, RoutemarkError::InvalidVerb { ref verb } if verb == "NOT A VERB"));
        assert!(store.is_empty());
    }
}
