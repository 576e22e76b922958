use proc_macro::TokenStream;

mod controller;
mod http_methods;
mod routes;

/// Attribute macro marking a struct as a controller with a base path
///
/// # Example
/// ```ignore
/// use routemark::controller;
///
/// #[controller(path = "/users")]
/// pub struct UserController {
///     greeting: String,
/// }
/// ```
///
/// Without `path`, no base path is recorded for the controller.
#[proc_macro_attribute]
pub fn controller(attr: TokenStream, item: TokenStream) -> TokenStream {
    controller::controller_attribute(attr, item)
}

/// Attribute macro collecting the members and routes of an impl block
///
/// Every `fn` taking `&self` and nothing else becomes a member of the
/// controller's prototype, in declaration order. Verb attributes on those
/// methods are turned into route annotations.
///
/// # Example
/// ```ignore
/// #[routes]
/// impl UserController {
///     #[get("/me")]
///     async fn me(&self) -> String {
///         self.greeting.clone()
///     }
///
///     fn helper(&self) -> &'static str {
///         "not routed, still collected"
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn routes(attr: TokenStream, item: TokenStream) -> TokenStream {
    routes::routes_attribute(attr, item)
}

/// HTTP GET method attribute for controller methods
#[proc_macro_attribute]
pub fn get(attr: TokenStream, item: TokenStream) -> TokenStream {
    http_methods::http_method_attribute(attr, item)
}

/// HTTP POST method attribute for controller methods
#[proc_macro_attribute]
pub fn post(attr: TokenStream, item: TokenStream) -> TokenStream {
    http_methods::http_method_attribute(attr, item)
}

/// HTTP PUT method attribute for controller methods
#[proc_macro_attribute]
pub fn put(attr: TokenStream, item: TokenStream) -> TokenStream {
    http_methods::http_method_attribute(attr, item)
}

/// HTTP DELETE method attribute for controller methods
#[proc_macro_attribute]
pub fn delete(attr: TokenStream, item: TokenStream) -> TokenStream {
    http_methods::http_method_attribute(attr, item)
}

/// HTTP PATCH method attribute for controller methods
#[proc_macro_attribute]
pub fn patch(attr: TokenStream, item: TokenStream) -> TokenStream {
    http_methods::http_method_attribute(attr, item)
}

/// Route attribute for any verb, including extension methods
///
/// # Example
/// ```ignore
/// #[route(method = "PURGE", path = "/cache")]
/// fn purge(&self) -> &'static str { "purged" }
/// ```
#[proc_macro_attribute]
pub fn route(attr: TokenStream, item: TokenStream) -> TokenStream {
    http_methods::route_attribute(attr, item)
}
