//! Common parsing utilities
//!
//! Helpers for the `#[introspect(...)]` helper attribute.

use syn::{parenthesized, punctuated::Punctuated, Attribute, Token, Type};

/// Options collected from `#[introspect(...)]` attributes.
#[derive(Default)]
pub struct IntrospectOptions {
    /// `bases(A, B)`: direct base classes, in declaration order.
    pub bases: Vec<Type>,
}

/// Parse every `#[introspect(...)]` attribute on an item.
///
/// ```ignore
/// #[introspect(bases(Shape, Named))]
/// ```
pub fn parse_introspect_attrs(attrs: &[Attribute]) -> syn::Result<IntrospectOptions> {
    let mut options = IntrospectOptions::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("introspect")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("bases") {
                let content;
                parenthesized!(content in meta.input);
                let list = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
                options.bases.extend(list);
                Ok(())
            } else {
                Err(meta.error("unsupported introspect option, expected `bases(...)`"))
            }
        })?;
    }
    Ok(options)
}

/// The last path segment of a plain path type (`a::b::Name<T>` gives `Name`).
pub fn last_segment_ident(ty: &Type) -> Option<&syn::Ident> {
    match ty {
        Type::Path(tp) if tp.qself.is_none() => tp.path.segments.last().map(|s| &s.ident),
        _ => None,
    }
}
