//! Procedural macros for the type-trait crate
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Introspect)]` | struct/union/enum | Category, descriptor and bases for a user type |
//! | `impl_fn_types!()` | - | `Introspect` for every function pointer shape (internal) |
//! | `impl_library_types!(core)` | - | `Introspect` for library types (internal) |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Introspect)]
//! struct Shape;
//!
//! #[derive(Introspect)]
//! #[introspect(bases(Shape))]
//! struct Circle { radius: f64 }
//!
//! assert!(is_base_of::<Shape, Circle>());
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput, Ident};

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod common;
mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate `Introspect` impls for function pointer types.
///
/// Covers arity 0 through 12, safe and `unsafe`, `extern "Rust"` and
/// `extern "C"`, plus `unsafe extern "C"` C-variadic forms. Only meaningful
/// inside the type-trait crate.
#[doc(hidden)]
#[proc_macro]
pub fn impl_fn_types(_input: TokenStream) -> TokenStream {
    inner::fn_types::expand_impl_fn_types().into()
}

/// Generate `Introspect` impls for one library type table.
///
/// # Usage
/// ```ignore
/// impl_library_types!(core);
/// #[cfg(feature = "alloc")]
/// impl_library_types!(alloc);
/// ```
#[doc(hidden)]
#[proc_macro]
pub fn impl_library_types(input: TokenStream) -> TokenStream {
    let name = parse_macro_input!(input as Ident);
    inner::std_types::expand_library_types(name).into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Derive `Introspect` for a struct, union or enum.
///
/// Direct base classes are declared with `#[introspect(bases(A, B))]`.
#[proc_macro_derive(Introspect, attributes(introspect))]
pub fn derive_introspect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::introspect::expand_derive_introspect(input).into()
}
