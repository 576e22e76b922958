use crate::error::{Result, RoutemarkError};
use crate::metadata::{HandlerId, MetadataKind, MetadataStore};
use axum::http::Method;

/// Produces method annotations for one HTTP verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbAnnotator {
    verb: Method,
}

impl VerbAnnotator {
    pub const GET: VerbAnnotator = VerbAnnotator::new(Method::GET);
    pub const POST: VerbAnnotator = VerbAnnotator::new(Method::POST);
    pub const PUT: VerbAnnotator = VerbAnnotator::new(Method::PUT);
    pub const DELETE: VerbAnnotator = VerbAnnotator::new(Method::DELETE);
    pub const PATCH: VerbAnnotator = VerbAnnotator::new(Method::PATCH);

    pub const fn new(verb: Method) -> Self {
        Self { verb }
    }

    pub fn verb(&self) -> &Method {
        &self.verb
    }

    /// An annotation binding this verb to `path`.
    pub fn at(&self, path: impl Into<String>) -> MethodAnnotation {
        MethodAnnotation {
            verb: self.verb.clone(),
            path: path.into(),
        }
    }
}

/// Builds an annotator for a verb, including extension methods such as `PURGE`.
///
/// Unlike an untyped verb string, the verb must be a valid HTTP method token:
/// arbitrary strings (empty, containing spaces or control characters) are
/// rejected rather than recorded. The verb is used verbatim: `"get"` is an
/// extension method distinct from `GET`.
///
/// # Errors
/// Returns [`RoutemarkError::InvalidVerb`] if `verb` is not a valid method token.
pub fn make_verb_annotator(verb: &str) -> Result<VerbAnnotator> {
    Method::from_bytes(verb.as_bytes())
        .map(VerbAnnotator::new)
        .map_err(|_| RoutemarkError::invalid_verb(verb))
}

pub fn get(path: impl Into<String>) -> MethodAnnotation {
    VerbAnnotator::GET.at(path)
}

pub fn post(path: impl Into<String>) -> MethodAnnotation {
    VerbAnnotator::POST.at(path)
}

pub fn put(path: impl Into<String>) -> MethodAnnotation {
    VerbAnnotator::PUT.at(path)
}

pub fn delete(path: impl Into<String>) -> MethodAnnotation {
    VerbAnnotator::DELETE.at(path)
}

pub fn patch(path: impl Into<String>) -> MethodAnnotation {
    VerbAnnotator::PATCH.at(path)
}

/// Method-level annotation: a verb plus a sub-path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodAnnotation {
    verb: Method,
    path: String,
}

impl MethodAnnotation {
    pub fn verb(&self) -> &Method {
        &self.verb
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Attaches the path and the verb to `handler`, replacing earlier ones.
    pub fn apply(&self, store: &MetadataStore, handler: HandlerId) {
        tracing::debug!("Annotating {} with {} {}", handler, self.verb, self.path);
        store.define(MetadataKind::Path, self.path.clone(), handler);
        store.define(MetadataKind::Method, self.verb.clone(), handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Items;

    #[test]
    fn test_convenience_annotators() {
        assert_eq!(get("/a").verb(), Method::GET);
        assert_eq!(post("/b").verb(), Method::POST);
        assert_eq!(put("/c").verb(), Method::PUT);
        assert_eq!(delete("/d").verb(), Method::DELETE);
        assert_eq!(patch("/e").verb(), Method::PATCH);
        assert_eq!(patch("/e").path(), "/e");
    }

    #[test]
    fn test_apply_records_path_and_verb() {
        let store = MetadataStore::new();
        let id = HandlerId::of::<Items>("list");
        get("/items").apply(&store, id);

        assert_eq!(
            store.get::<String>(MetadataKind::Path, id).as_deref(),
            Some("/items")
        );
        assert_eq!(store.get::<Method>(MetadataKind::Method, id), Some(Method::GET));
    }

    #[test]
    fn test_second_annotation_overwrites_first() {
        let store = MetadataStore::new();
        let id = HandlerId::of::<Items>("save");
        get("/first").apply(&store, id);
        post("/second").apply(&store, id);

        assert_eq!(store.get::<Method>(MetadataKind::Method, id), Some(Method::POST));
        assert_eq!(
            store.get::<String>(MetadataKind::Path, id).as_deref(),
            Some("/second")
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_extension_verb() {
        let purge = make_verb_annotator("PURGE").unwrap();
        assert_eq!(purge.verb().as_str(), "PURGE");
        assert_eq!(make_verb_annotator("GET").unwrap(), VerbAnnotator::GET);
    }

    #[test]
    fn test_invalid_verbs() {
        for verb in ["", "GE T", "GET\n"] {
            let err = make_verb_annotator(verb).unwrap_err();
            assert!(matches!(err, RoutemarkError::InvalidVerb { .. }), "{verb:?}");
        }
    }
}
