use darling::{ast::NestedMeta, FromMeta};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, ItemStruct};

#[derive(Debug, Default, FromMeta)]
struct ControllerArgs {
    #[darling(default)]
    path: Option<String>,
}

pub fn controller_attribute(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr_args = match NestedMeta::parse_meta_list(attr.into()) {
        Ok(args) => args,
        Err(e) => return TokenStream::from(darling::Error::from(e).write_errors()),
    };
    let args = match ControllerArgs::from_list(&attr_args) {
        Ok(args) => args,
        Err(e) => return TokenStream::from(e.write_errors()),
    };
    let input = parse_macro_input!(item as ItemStruct);
    TokenStream::from(generate_controller_impl(&args, &input))
}

fn generate_controller_impl(args: &ControllerArgs, input: &ItemStruct) -> TokenStream2 {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let base_path = match &args.path {
        Some(path) => quote! { ::std::option::Option::Some(#path) },
        None => quote! { ::std::option::Option::None },
    };
    quote! {
        #input

        impl #impl_generics #struct_name #ty_generics #where_clause {
            pub fn base_path() -> ::std::option::Option<&'static str> {
                #base_path
            }
        }
    }
}
