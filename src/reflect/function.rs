//! Function types.
//!
//! Rust spells a function type only through its pointer, so `fn(A) -> R`
//! is the function type `R(A)`. Every arity up to 12, both safeties, the
//! Rust and C ABIs and the C-variadic forms are covered. Higher-ranked
//! pointers such as `fn(&u8)` are distinct types and are not.

macros::impl_fn_types!();
