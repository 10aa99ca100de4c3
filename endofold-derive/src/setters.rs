//! Implementation of the `#[derive(Setters)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Entry point called by the derive.
pub fn derive_setters_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input).unwrap_or_else(syn::Error::into_compile_error))
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named_fields) => &named_fields.named,
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Setters can only be derived for structs with named fields, not tuple structs.",
                ));
            }
            Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Setters cannot be derived for unit structs (structs with no fields).",
                ));
            }
        },
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Setters can only be derived for structs, not enums.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(name, "Setters cannot be derived for unions."));
        }
    };

    let methods = fields
        .iter()
        .filter_map(|field| field.ident.as_ref().map(|ident| (ident, &field.ty)))
        .map(|(field_name, field_type)| {
            let setter = format_ident!("set_{}", field_name);
            let modifier = format_ident!("modify_{}", field_name);
            let set_doc = format!("Returns an endomorphism that sets `{field_name}` to `value`.");
            let modify_doc =
                format!("Returns an endomorphism that replaces `{field_name}` with `function` applied to it.");

            quote! {
                #[doc = #set_doc]
                #[must_use]
                pub fn #setter<V>(value: V) -> ::endofold::endo::Endo<Self>
                where
                    V: ::std::borrow::ToOwned<Owned = #field_type> + 'static,
                    Self: 'static,
                {
                    ::endofold::endo::Endo::new(move |mut source: Self| {
                        source.#field_name = ::std::borrow::ToOwned::to_owned(&value);
                        source
                    })
                }

                #[doc = #modify_doc]
                #[must_use]
                pub fn #modifier<F>(function: F) -> ::endofold::endo::Endo<Self>
                where
                    F: ::core::ops::Fn(#field_type) -> #field_type + 'static,
                    Self: 'static,
                {
                    ::endofold::endo::Endo::new(move |mut source: Self| {
                        let current = source.#field_name;
                        source.#field_name = function(current);
                        source
                    })
                }
            }
        })
        .collect::<Vec<_>>();

    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#methods)*
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    #[rstest]
    fn generates_setter_and_modifier_per_field() {
        let input: DeriveInput = parse_quote! {
            struct Endpoint {
                host: String,
                port: u16,
            }
        };
        let generated = expand(&input).map(|tokens| tokens.to_string()).unwrap_or_default();
        for method in ["set_host", "modify_host", "set_port", "modify_port"] {
            assert!(generated.contains(method), "missing {method} in {generated}");
        }
    }

    #[rstest]
    fn setter_bound_sits_on_the_method_parameter() {
        let input: DeriveInput = parse_quote! {
            struct Service {
                name: String,
                handle: Handle,
            }
        };
        let generated = expand(&input).map(|tokens| tokens.to_string()).unwrap_or_default();
        assert!(generated.contains("ToOwned < Owned = Handle >"), "{generated}");
        assert!(!generated.contains("Handle : :: core :: clone :: Clone"), "{generated}");
    }

    #[rstest]
    fn keeps_struct_generics() {
        let input: DeriveInput = parse_quote! {
            struct Wrapper<T: Default> {
                inner: T,
            }
        };
        let generated = expand(&input).map(|tokens| tokens.to_string()).unwrap_or_default();
        assert!(generated.contains("Wrapper < T >"));
        assert!(generated.contains("set_inner"));
    }

    #[rstest]
    #[case(parse_quote! { struct Pair(i32, i32); }, "tuple structs")]
    #[case(parse_quote! { struct Marker; }, "unit structs")]
    #[case(parse_quote! { enum Mode { On, Off } }, "not enums")]
    #[case(parse_quote! { union Bits { word: u32, bytes: [u8; 4] } }, "unions")]
    fn rejects_shapes_without_named_fields(#[case] input: DeriveInput, #[case] message: &str) {
        let error = expand(&input).err().map(|error| error.to_string()).unwrap_or_default();
        assert!(error.contains(message), "unexpected error: {error}");
    }
}
