//! `#[derive(Introspect)]`
//!
//! The derive is the only place that sees whether an item is a struct, a
//! union or an enum, so it decides the category the library cannot:
//!
//! | Item | Category |
//! |------|----------|
//! | `struct` | class |
//! | `union` | union |
//! | `enum`, all variants fieldless | enum |
//! | `enum` with data | class |
//!
//! The impl itself is produced by the `__impl_introspect!` bridge so that
//! `module_path!()` expands at the deriving site.

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{Data, DeriveInput, Fields, GenericParam, LitStr};

use crate::common::{last_segment_ident, parse_introspect_attrs};

pub fn expand_derive_introspect(input: DeriveInput) -> TokenStream2 {
    match try_expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let options = parse_introspect_attrs(&input.attrs)?;

    let (tag, kind) = match &input.data {
        Data::Struct(_) => (quote!(ClassTag), quote!(Class)),
        Data::Union(_) => (quote!(UnionTag), quote!(Union)),
        Data::Enum(data) if data.variants.iter().all(|v| matches!(v.fields, Fields::Unit)) => {
            (quote!(EnumTag), quote!(Enum))
        }
        Data::Enum(_) => (quote!(ClassTag), quote!(Class)),
    };

    if !options.bases.is_empty() && !matches!(input.data, Data::Struct(_)) {
        return Err(syn::Error::new_spanned(
            ident,
            "only structs can declare `bases`; unions and enums have no base classes",
        ));
    }
    for base in &options.bases {
        let names_self = match last_segment_ident(base) {
            Some(seg) => seg == ident || seg == "Self",
            None => false,
        };
        if names_self {
            return Err(syn::Error::new_spanned(base, "a type cannot be its own base"));
        }
    }

    let mut params = Vec::new();
    let mut type_args = Vec::new();
    let mut const_args = Vec::new();
    for param in &input.generics.params {
        match param {
            GenericParam::Lifetime(lt) => {
                return Err(syn::Error::new_spanned(
                    lt,
                    "`Introspect` cannot be derived for types with lifetime parameters",
                ));
            }
            GenericParam::Type(tp) => {
                let name = &tp.ident;
                let bounds = &tp.bounds;
                params.push(if bounds.is_empty() {
                    quote!(#name: ::type_trait::Introspect)
                } else {
                    quote!(#name: #bounds + ::type_trait::Introspect)
                });
                type_args.push(name.clone());
            }
            GenericParam::Const(cp) => {
                let name = &cp.ident;
                let ty = &cp.ty;
                params.push(quote!(const #name: #ty));
                const_args.push(name.clone());
            }
        }
    }

    let (_, ty_generics, where_clause) = input.generics.split_for_impl();
    let predicates = where_clause.map(|w| w.predicates.to_token_stream());
    let name = LitStr::new(&ident.to_string(), ident.span());
    let bases = &options.bases;

    let expanded = quote! {
        ::type_trait::__impl_introspect! {
            impl [#(#params),*] #ident #ty_generics where [#predicates] {
                category: ::type_trait::#tag,
                desc: &::type_trait::TypeDesc::Adt(::type_trait::AdtDesc {
                    kind: ::type_trait::AdtKind::#kind,
                    path: ::core::concat!(::core::module_path!(), "::", #name),
                    args: &[#(<#type_args as ::type_trait::Introspect>::DESC),*],
                    consts: &[#(#const_args as u128),*],
                    site: ::core::concat!(::core::file!(), ":", ::core::line!(), ":", ::core::column!()),
                    bases: &[#(<#bases as ::type_trait::Introspect>::DESC),*],
                }),
            }
        }
    };

    // Generic items may take bases from their parameters; those are only
    // known per instantiation.
    let base_checks = if input.generics.params.is_empty() {
        bases
            .iter()
            .map(|base| {
                let msg = format!(
                    "base `{}` of `{}` is not a class type",
                    base.to_token_stream(),
                    ident
                );
                quote! {
                    const _: () = ::core::assert!(::type_trait::is_class::<#base>(), #msg);
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    Ok(quote! {
        #expanded
        #(#base_checks)*
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> String {
        expand_derive_introspect(input).to_string()
    }

    #[test]
    fn test_fieldless_enum_is_enum() {
        let text = expand(parse_quote!(enum Color { Red, Green }));
        assert!(text.contains("EnumTag"), "{text}");
    }

    #[test]
    fn test_data_enum_is_class() {
        let text = expand(parse_quote!(enum Shape { Circle(f64), Empty }));
        assert!(text.contains("ClassTag"), "{text}");
    }

    #[test]
    fn test_lifetime_rejected() {
        let text = expand(parse_quote!(struct View<'a> { s: &'a str }));
        assert!(text.contains("compile_error"), "{text}");
    }

    #[test]
    fn test_self_base_rejected() {
        let text = expand(parse_quote!(#[introspect(bases(Node))] struct Node;));
        assert!(text.contains("own base"), "{text}");
    }

    #[test]
    fn test_base_check_only_without_generics() {
        let plain = expand(parse_quote!(#[introspect(bases(Base))] struct Leaf;));
        assert!(plain.contains("is_class"), "{plain}");
        let generic = expand(parse_quote!(#[introspect(bases(Base))] struct Leaf<T>(T);));
        assert!(!generic.contains("is_class"), "{generic}");
    }
}
