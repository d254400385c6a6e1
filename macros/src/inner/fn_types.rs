//! Function pointer type impls.
//!
//! Rust has no variadic generics, so each function shape is its own impl.
//! The shapes are the cross product of safety, ABI and arity, plus the
//! C-variadic forms, which need at least one named argument.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Highest arity generated.
pub const MAX_ARITY: usize = 12;

/// ABIs generated. `"Rust"` is written as a plain `fn`.
pub const ABIS: &[&str] = &["Rust", "C"];

/// One function pointer shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FnShape {
    pub arity: usize,
    pub is_unsafe: bool,
    pub abi: &'static str,
    pub variadic: bool,
}

/// Every shape that gets an impl.
pub fn shapes() -> Vec<FnShape> {
    let mut out = Vec::new();
    for arity in 0..=MAX_ARITY {
        for &abi in ABIS {
            for is_unsafe in [false, true] {
                out.push(FnShape { arity, is_unsafe, abi, variadic: false });
            }
        }
        if arity > 0 {
            out.push(FnShape { arity, is_unsafe: true, abi: "C", variadic: true });
        }
    }
    out
}

fn expand_shape(shape: FnShape) -> TokenStream {
    let args: Vec<_> = (0..shape.arity).map(|i| format_ident!("A{}", i)).collect();

    let unsafety = shape.is_unsafe.then(|| quote!(unsafe));
    let abi = (shape.abi != "Rust").then(|| {
        let abi = shape.abi;
        quote!(extern #abi)
    });
    let dots = shape.variadic.then(|| quote!(, ...));

    let FnShape { is_unsafe, variadic, abi: abi_name, .. } = shape;

    quote! {
        impl<R: crate::Introspect #(, #args: crate::Introspect)*> crate::Introspect
            for #unsafety #abi fn(#(#args),* #dots) -> R
        {
            type Category = crate::FunctionTag;
            type IsConst = crate::FalseType;
            type IsVolatile = crate::FalseType;
            type RemoveConst = Self;
            type RemoveVolatile = Self;
            type RemoveCv = Self;
            type AddConst = Self;
            type AddVolatile = Self;
            type AddCv = Self;
            type RemoveReference = Self;
            type AddLvalueReference = &'static Self;
            type AddRvalueReference = crate::RvalueRef<Self>;
            type RemovePointer = Self;
            type AddPointer = *mut Self;
            type RemoveExtent = Self;
            type RemoveAllExtents = Self;
            const DESC: &'static crate::TypeDesc = &crate::TypeDesc::Function(crate::FnDesc {
                abi: #abi_name,
                is_unsafe: #is_unsafe,
                variadic: #variadic,
                inputs: &[#(<#args as crate::Introspect>::DESC),*],
                output: <R as crate::Introspect>::DESC,
            });
        }
    }
}

/// Generate `Introspect` impls for every function pointer shape.
pub fn expand_impl_fn_types() -> TokenStream {
    let impls = shapes().into_iter().map(expand_shape);
    quote! { #(#impls)* }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_count() {
        // 13 arities x 2 ABIs x 2 safeties, plus 12 variadic arities
        assert_eq!(shapes().len(), 13 * 2 * 2 + 12);
    }

    #[test]
    fn test_variadic_needs_named_argument() {
        assert!(shapes().iter().filter(|s| s.variadic).all(|s| s.arity > 0 && s.is_unsafe && s.abi == "C"));
    }

    #[test]
    fn test_expansion_spells_variadic() {
        let shape = FnShape { arity: 1, is_unsafe: true, abi: "C", variadic: true };
        let text = expand_shape(shape).to_string();
        assert!(text.contains("unsafe extern \"C\" fn"), "{text}");
        assert!(text.contains("..."), "{text}");
    }
}
