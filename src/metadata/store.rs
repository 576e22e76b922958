use crate::controller::Controller;
use crate::error::{Result, RoutemarkError};
use crate::metadata::{MetadataKind, Subject};
use dashmap::DashMap;
use std::any::Any;
use std::sync::{Arc, LazyLock};

type MetadataValue = Arc<dyn Any + Send + Sync>;

static GLOBAL: LazyLock<MetadataStore> = LazyLock::new(MetadataStore::new);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MetadataKey {
    subject: Subject,
    kind: MetadataKind,
}

/// Key-value registry holding controller and handler metadata.
///
/// Values are attached and read, never removed. Writing the same
/// `(subject, kind)` twice keeps only the last value.
pub struct MetadataStore {
    entries: DashMap<MetadataKey, MetadataValue>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// The process-wide store.
    pub fn global() -> &'static MetadataStore {
        &GLOBAL
    }

    pub fn define<T: Send + Sync + 'static>(
        &self,
        kind: MetadataKind,
        value: T,
        subject: impl Into<Subject>,
    ) {
        let key = MetadataKey {
            subject: subject.into(),
            kind,
        };
        if self.entries.insert(key, Arc::new(value)).is_some() {
            tracing::debug!("Overwrote '{}' metadata on {}", kind, key.subject);
        } else {
            tracing::trace!("Defined '{}' metadata on {}", kind, key.subject);
        }
    }

    /// Returns the stored value, or `None` if nothing was defined or the value
    /// is of another type.
    pub fn get<T: Clone + 'static>(
        &self,
        kind: MetadataKind,
        subject: impl Into<Subject>,
    ) -> Option<T> {
        let subject = subject.into();
        let entry = self.entries.get(&MetadataKey { subject, kind })?;
        let value = entry.value().downcast_ref::<T>().cloned();
        if value.is_none() {
            tracing::trace!(
                "'{}' metadata on {} is not a {}",
                kind,
                subject,
                std::any::type_name::<T>()
            );
        }
        value
    }

    /// Like [`get`](Self::get), but reports a value of the wrong type as an error.
    pub fn try_get<T: Clone + 'static>(
        &self,
        kind: MetadataKind,
        subject: impl Into<Subject>,
    ) -> Result<Option<T>> {
        let subject = subject.into();
        let Some(entry) = self.entries.get(&MetadataKey { subject, kind }) else {
            return Ok(None);
        };
        entry
            .value()
            .downcast_ref::<T>()
            .cloned()
            .map(Some)
            .ok_or_else(|| RoutemarkError::MetadataTypeMismatch {
                kind,
                subject,
                expected: std::any::type_name::<T>(),
            })
    }

    pub fn contains(&self, kind: MetadataKind, subject: impl Into<Subject>) -> bool {
        self.entries.contains_key(&MetadataKey {
            subject: subject.into(),
            kind,
        })
    }

    /// Runs the annotation step of `C` against this store.
    pub fn install<C: Controller>(&self) -> Result<()> {
        tracing::debug!("Installing controller {}", std::any::type_name::<C>());
        C::annotate(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MetadataStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{ControllerId, HandlerId};

    struct TestController;

    #[test]
    fn test_define_and_get() {
        let store = MetadataStore::new();
        let subject = ControllerId::of::<TestController>();
        store.define(MetadataKind::Path, "/test".to_string(), subject);
        assert_eq!(
            store.get::<String>(MetadataKind::Path, subject),
            Some("/test".to_string())
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_absent_metadata_is_none() {
        let store = MetadataStore::new();
        let subject = HandlerId::of::<TestController>("missing");
        assert_eq!(store.get::<String>(MetadataKind::Path, subject), None);
        assert!(store.try_get::<String>(MetadataKind::Path, subject).unwrap().is_none());
        assert!(!store.contains(MetadataKind::Method, subject));
        assert!(store.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let store = MetadataStore::new();
        let subject = HandlerId::of::<TestController>("handler");
        store.define(MetadataKind::Path, "/first".to_string(), subject);
        store.define(MetadataKind::Path, "/second".to_string(), subject);
        assert_eq!(
            store.get::<String>(MetadataKind::Path, subject).as_deref(),
            Some("/second")
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_kinds_are_independent() {
        let store = MetadataStore::new();
        let subject = HandlerId::of::<TestController>("handler");
        store.define(MetadataKind::Path, "/a".to_string(), subject);
        assert!(store.contains(MetadataKind::Path, subject));
        assert!(!store.contains(MetadataKind::Method, subject));
    }

    #[test]
    fn test_type_mismatch() {
        let store = MetadataStore::new();
        let subject = ControllerId::of::<TestController>();
        store.define(MetadataKind::Path, 42u32, subject);

        assert_eq!(store.get::<String>(MetadataKind::Path, subject), None);
        let err = store
            .try_get::<String>(MetadataKind::Path, subject)
            .unwrap_err();
        assert!(matches!(
            err,
            RoutemarkError::MetadataTypeMismatch {
                kind: MetadataKind::Path,
                ..
            }
        ));
    }

    #[test]
    fn test_stores_are_isolated() {
        let first = MetadataStore::new();
        let second = MetadataStore::new();
        let subject = ControllerId::of::<TestController>();
        first.define(MetadataKind::Path, "/only-here".to_string(), subject);
        assert!(second.get::<String>(MetadataKind::Path, subject).is_none());
    }
}
