use crate::controller::{Controller, Handler, HandlerFn};
use crate::metadata::{ControllerId, HandlerId};
use indexmap::IndexMap;

/// The method members of controller `C`, in declaration order.
///
/// Only methods are members: associated functions without a receiver
/// (constructors and the like) are never added.
pub struct Prototype<C> {
    members: IndexMap<&'static str, Handler<C>>,
}

impl<C: 'static> Prototype<C> {
    pub fn builder() -> PrototypeBuilder<C> {
        PrototypeBuilder {
            controller: ControllerId::of::<C>(),
            members: IndexMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<Handler<C>> {
        self.members.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.members.keys().copied()
    }

    pub fn handlers(&self) -> impl Iterator<Item = Handler<C>> + '_ {
        self.members.values().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<C: Controller> Prototype<C> {
    /// The prototype every instance of `C` shares.
    pub fn of(_instance: &C) -> Self {
        C::prototype()
    }
}

pub struct PrototypeBuilder<C> {
    controller: ControllerId,
    members: IndexMap<&'static str, Handler<C>>,
}

impl<C> PrototypeBuilder<C> {
    /// Adds a method member with an invoker. Re-adding a name replaces its
    /// handler in place.
    pub fn method(self, name: &'static str, func: HandlerFn<C>) -> Self {
        self.insert(name, Some(func))
    }

    /// Adds a method member that is reported but cannot be invoked.
    pub fn member(self, name: &'static str) -> Self {
        self.insert(name, None)
    }

    fn insert(mut self, name: &'static str, func: Option<HandlerFn<C>>) -> Self {
        let handler = Handler::new(HandlerId::new(self.controller, name), func);
        if self.members.insert(name, handler).is_some() {
            tracing::debug!("Redefined member {}::{}", self.controller, name);
        }
        self
    }

    pub fn build(self) -> Prototype<C> {
        Prototype {
            members: self.members,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::HandlerFuture;
    use axum::response::IntoResponse;

    struct Widgets;

    fn first(_: &Widgets) -> HandlerFuture<'_> {
        Box::pin(async { "first".into_response() })
    }

    fn second(_: &Widgets) -> HandlerFuture<'_> {
        Box::pin(async { "second".into_response() })
    }

    fn replaced(_: &Widgets) -> HandlerFuture<'_> {
        Box::pin(async { "replaced".into_response() })
    }

    #[test]
    fn test_declaration_order() {
        let prototype = Prototype::<Widgets>::builder()
            .method("zeta", first)
            .method("alpha", second)
            .build();
        assert_eq!(prototype.names().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        assert_eq!(prototype.len(), 2);
    }

    #[tokio::test]
    async fn test_redefinition_keeps_position() {
        let prototype = Prototype::<Widgets>::builder()
            .method("a", first)
            .method("b", second)
            .method("a", replaced)
            .build();
        assert_eq!(prototype.names().collect::<Vec<_>>(), vec!["a", "b"]);
        let response = prototype.get("a").unwrap().call(&Widgets).unwrap().await;
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"replaced");
    }

    #[test]
    fn test_handler_ids() {
        let prototype = Prototype::<Widgets>::builder().method("a", first).build();
        let handler = prototype.get("a").unwrap();
        assert_eq!(handler.id(), HandlerId::of::<Widgets>("a"));
        assert_eq!(handler.name(), "a");
        assert!(handler.is_callable());
        assert!(prototype.get("missing").is_none());
    }

    #[test]
    fn test_member_without_invoker() {
        let prototype = Prototype::<Widgets>::builder()
            .method("a", first)
            .member("count")
            .build();
        assert_eq!(prototype.names().collect::<Vec<_>>(), vec!["a", "count"]);
        let count = prototype.get("count").unwrap();
        assert!(!count.is_callable());
        assert!(count.call(&Widgets).is_none());
        assert_eq!(count.id(), HandlerId::of::<Widgets>("count"));
    }
}
