use darling::FromMeta;
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{ext::IdentExt, parse_macro_input, Attribute, ImplItem, ImplItemFn, ItemImpl, LitStr, Type};

const HTTP_METHOD_ATTRS: [&str; 5] = ["get", "post", "put", "delete", "patch"];

#[derive(Debug, FromMeta)]
struct RouteArgs {
    method: String,
    path: String,
}

enum Verb {
    Standard(syn::Ident),
    Custom(String),
}

struct RouteInfo {
    verb: Verb,
    path: String,
}

struct MemberInfo {
    fn_name: syn::Ident,
    name: String,
    is_async: bool,
    routes: Vec<RouteInfo>,
}

pub fn routes_attribute(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemImpl);
    let expanded = generate_routes_impl(input).unwrap_or_else(syn::Error::into_compile_error);
    TokenStream::from(expanded)
}

fn generate_routes_impl(mut input: ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &input.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[routes] must be placed on an inherent impl block",
        ));
    }
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[routes] does not support generic impl blocks",
        ));
    }

    let mut members: Vec<MemberInfo> = Vec::new();
    for item in input.items.iter_mut() {
        if let ImplItem::Fn(method) = item {
            let routes = extract_routes(&method.attrs)?;
            method.attrs.retain(|attr| !is_route_attr(attr));

            if is_member(method) {
                members.push(MemberInfo {
                    fn_name: method.sig.ident.clone(),
                    name: method.sig.ident.unraw().to_string(),
                    is_async: method.sig.asyncness.is_some(),
                    routes,
                });
            } else if !routes.is_empty() {
                return Err(syn::Error::new_spanned(
                    &method.sig,
                    "route handlers must take `&self` and no other arguments",
                ));
            }
        }
    }

    let self_ty = &input.self_ty;

    // Only routed members need a response; other members are reported without an invoker.
    let shims = members.iter().filter(|member| !member.routes.is_empty()).map(|member| {
        let fn_name = &member.fn_name;
        let shim = shim_ident(fn_name);
        let call = if member.is_async {
            quote! { this.#fn_name().await }
        } else {
            quote! { this.#fn_name() }
        };
        quote! {
            fn #shim(this: &#self_ty) -> ::routemark::HandlerFuture<'_> {
                ::std::boxed::Box::pin(async move {
                    ::routemark::axum::response::IntoResponse::into_response(#call)
                })
            }
        }
    });

    let member_registrations = members.iter().map(|member| {
        let name = &member.name;
        if member.routes.is_empty() {
            quote! { .member(#name) }
        } else {
            let shim = shim_ident(&member.fn_name);
            quote! { .method(#name, #shim) }
        }
    });

    let route_annotations = members.iter().flat_map(|member| {
        let name = &member.name;
        member.routes.iter().map(move |route| {
            let path = &route.path;
            let annotator = match &route.verb {
                Verb::Standard(ident) => quote! { ::routemark::VerbAnnotator::#ident },
                Verb::Custom(verb) => quote! { ::routemark::make_verb_annotator(#verb)? },
            };
            quote! {
                #annotator
                    .at(#path)
                    .apply(store, ::routemark::HandlerId::of::<Self>(#name));
            }
        })
    });

    Ok(quote! {
        #input

        impl ::routemark::Controller for #self_ty {
            fn prototype() -> ::routemark::Prototype<Self> {
                #(#shims)*
                ::routemark::Prototype::<Self>::builder()
                    #(#member_registrations)*
                    .build()
            }

            fn annotate(store: &::routemark::MetadataStore) -> ::routemark::Result<()> {
                #[allow(unused_imports)]
                use ::routemark::controller::UnmarkedController as _;
                if let ::std::option::Option::Some(path) = Self::base_path() {
                    ::routemark::mark_controller(path).apply::<Self>(store);
                }
                #(#route_annotations)*
                ::std::result::Result::Ok(())
            }
        }
    })
}

fn shim_ident(fn_name: &syn::Ident) -> syn::Ident {
    format_ident!("__routemark_{}", fn_name.unraw())
}

/// A member takes `&self` and nothing else, so it can be invoked on a shared
/// instance without argument binding.
fn is_member(method: &ImplItemFn) -> bool {
    let sig = &method.sig;
    let Some(receiver) = sig.receiver() else {
        return false;
    };
    let shared_ref = matches!(&*receiver.ty, Type::Reference(r) if r.mutability.is_none());
    shared_ref
        && sig.inputs.len() == 1
        && sig.generics.params.is_empty()
        && sig.unsafety.is_none()
        && sig.variadic.is_none()
}

fn extract_routes(attrs: &[Attribute]) -> syn::Result<Vec<RouteInfo>> {
    let mut routes = Vec::new();
    for attr in attrs {
        let Some(ident) = attr.path().get_ident() else {
            continue;
        };
        let name = ident.to_string();
        if HTTP_METHOD_ATTRS.contains(&name.as_str()) {
            let path: LitStr = attr.parse_args()?;
            routes.push(RouteInfo {
                verb: Verb::Standard(syn::Ident::new(&name.to_uppercase(), Span::call_site())),
                path: path.value(),
            });
        } else if name == "route" {
            let args = RouteArgs::from_meta(&attr.meta)
                .map_err(|e| syn::Error::new_spanned(attr, e.to_string()))?;
            if !is_http_token(&args.method) {
                return Err(syn::Error::new_spanned(
                    attr,
                    format!("`{}` is not a valid HTTP method", args.method),
                ));
            }
            routes.push(RouteInfo {
                verb: Verb::Custom(args.method),
                path: args.path,
            });
        }
    }
    Ok(routes)
}

fn is_route_attr(attr: &Attribute) -> bool {
    attr.path().get_ident().map_or(false, |ident| {
        let name = ident.to_string();
        name == "route" || HTTP_METHOD_ATTRS.contains(&name.as_str())
    })
}

fn is_http_token(method: &str) -> bool {
    !method.is_empty()
        && method
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b))
}
