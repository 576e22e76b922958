//! Route collection.
//!
//! [`RouteCollector::collect`] walks the prototype of a controller instance
//! and pairs every method member with the path and verb recorded for it.

mod descriptor;
mod options;

pub use descriptor::{RouteDescriptor, RouteSummary};
pub use options::CollectOptions;

use crate::controller::{Controller, Prototype};
use crate::error::Result;
use crate::metadata::{MetadataKind, MetadataStore};

/// Reads route metadata for controller instances.
#[derive(Clone, Copy)]
pub struct RouteCollector<'s> {
    store: &'s MetadataStore,
}

impl<'s> RouteCollector<'s> {
    pub fn new(store: &'s MetadataStore) -> Self {
        Self { store }
    }

    /// The store this collector reads from.
    pub fn store(&self) -> &'s MetadataStore {
        self.store
    }

    /// One descriptor per method member of `instance`'s controller, in
    /// declaration order. Members without annotations are reported with
    /// `path` and `method` set to `None`.
    pub fn collect<C: Controller>(&self, instance: &C) -> Vec<RouteDescriptor<C>> {
        self.collect_with(instance, CollectOptions::default())
    }

    pub fn collect_with<C: Controller>(
        &self,
        instance: &C,
        options: CollectOptions,
    ) -> Vec<RouteDescriptor<C>> {
        let prototype = Prototype::of(instance);
        let mut routes = Vec::with_capacity(prototype.len());

        for handler in prototype.handlers() {
            let id = handler.id();
            let descriptor = RouteDescriptor {
                path: self.store.get(MetadataKind::Path, id),
                method: self.store.get(MetadataKind::Method, id),
                handler,
                handler_name: handler.name(),
            };

            if !descriptor.is_routable() {
                tracing::trace!("{} has no verb annotation", id);
                if !options.includes_unannotated() {
                    continue;
                }
            }
            routes.push(descriptor);
        }

        tracing::debug!(
            "Collected {} routes from {}",
            routes.len(),
            std::any::type_name::<C>()
        );
        routes
    }

    /// Serializable summaries of [`collect`](Self::collect).
    pub fn summaries<C: Controller>(&self, instance: &C) -> Vec<RouteSummary> {
        self.collect(instance)
            .iter()
            .map(RouteDescriptor::summary)
            .collect()
    }

    /// The summaries as a JSON array.
    pub fn to_json<C: Controller>(&self, instance: &C) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.summaries(instance))?)
    }
}

impl RouteCollector<'static> {
    /// A collector over [`MetadataStore::global`].
    pub fn global() -> Self {
        Self::new(MetadataStore::global())
    }
}
