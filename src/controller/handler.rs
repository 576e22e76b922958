use crate::metadata::HandlerId;
use axum::response::Response;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Future returned by a handler invocation.
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = Response> + Send + 'a>>;

/// Type-erased handler function of controller `C`.
pub type HandlerFn<C> = for<'a> fn(&'a C) -> HandlerFuture<'a>;

/// A method of a controller, shared by every instance of it.
///
/// Members that are not exposed as routes may carry no invoker: their return
/// type need not be a response.
pub struct Handler<C> {
    id: HandlerId,
    func: Option<HandlerFn<C>>,
}

impl<C> Handler<C> {
    pub(crate) fn new(id: HandlerId, func: Option<HandlerFn<C>>) -> Self {
        Self { id, func }
    }

    pub fn id(&self) -> HandlerId {
        self.id
    }

    /// Member name the handler was declared under.
    pub fn name(&self) -> &'static str {
        self.id.member()
    }

    pub fn func(&self) -> Option<HandlerFn<C>> {
        self.func
    }

    pub fn is_callable(&self) -> bool {
        self.func.is_some()
    }

    /// Invokes the handler on `instance`, or `None` if it has no invoker.
    pub fn call<'a>(&self, instance: &'a C) -> Option<HandlerFuture<'a>> {
        self.func.map(|func| func(instance))
    }
}

impl<C> Clone for Handler<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Handler<C> {}

impl<C> PartialEq for Handler<C> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<C> Eq for Handler<C> {}

impl<C> fmt::Debug for Handler<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler").field(&self.id).finish()
    }
}
