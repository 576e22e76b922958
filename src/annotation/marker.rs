use crate::metadata::{ControllerId, MetadataKind, MetadataStore};

/// Class-level annotation carrying a controller's base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerMarker {
    base_path: String,
}

/// Creates a marker recording `base_path` on whichever controller it is applied to.
pub fn mark_controller(base_path: impl Into<String>) -> ControllerMarker {
    ControllerMarker {
        base_path: base_path.into(),
    }
}

impl ControllerMarker {
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn apply<C: 'static>(&self, store: &MetadataStore) {
        let controller = ControllerId::of::<C>();
        tracing::debug!("Marking controller {} at {}", controller, self.base_path);
        store.define(MetadataKind::Path, self.base_path.clone(), controller);
    }
}
