//! Library classes, unions and enums.
//!
//! Generated from the tables in the macros crate. `core::cmp::Ordering`
//! is an enum, `core::mem::MaybeUninit` a union, everything else a class.

macros::impl_library_types!(core);

#[cfg(feature = "alloc")]
macros::impl_library_types!(alloc);

#[cfg(feature = "std")]
macros::impl_library_types!(std);
