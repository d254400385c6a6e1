#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library types
// - alloc: enables alloc types in no_std
// - detect: enables has_method! / has_trait!

//! # type-trait
//!
//! Compile-time type introspection: ask a type what it is, or turn it into
//! another type, with the answer folded by the compiler.
//!
//! ```text
//! is_integral::<Const<i32>>()                  -> true
//! RemovePointer<Const<*mut f64>>               -> f64
//! Conditional<{ is_signed::<i8>() }, u8, i8>   -> u8
//! is_base_of::<Shape, Circle>()                -> true
//! ```
//!
//! ## Architecture
//!
//! Every query is a projection through one trait, [`Introspect`], whose
//! associated types answer the category of a type (as a row of type-level
//! booleans) and name its one-step transforms. Composite predicates are
//! boolean algebra over those rows; transforms compose by projecting again.
//! Identity and base-class search compare `const` structural descriptors.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - IntegralConstant wrappers, TrueType/FalseType, Bool algebra    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Reflection                                              |
//! |  - Introspect, Category tags, TypeDesc                            |
//! |  - impls: primitives, qualifiers, compounds, fn pointers, library |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Queries                                                 |
//! |  - cv, relation, primary, composite, property                     |
//! |  - reference, pointer, array, misc (Conditional, EnableIf, Decay) |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Detection                                               |
//! |  - has_method!, has_trait!                                        |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Spelling C++ types
//!
//! | C++ | Here |
//! |-----|------|
//! | `void` | `()` |
//! | `std::nullptr_t` | [`NullPtr`] |
//! | `T const`, `T volatile` | [`Const<T>`], [`Volatile<T>`], [`ConstVolatile<T>`] |
//! | `T*` | `*mut T`, `*const T` |
//! | `T&`, `T&&` | `&'static T`, `&'static mut T`, [`RvalueRef<T>`] |
//! | `T[N]`, `T[]` | `[T; N]`, `[T]` |
//! | `R(A...)` | `fn(A...) -> R` |
//! | `T C::*` | [`MemberPtr<T, C>`] |
//! | class, union, enum | `#[derive(Introspect)]` |
//!
//! ## Quick Start
//!
//! ```ignore
//! use type_trait::prelude::*;
//!
//! #[derive(Introspect)]
//! struct Shape;
//!
//! #[derive(Introspect)]
//! #[introspect(bases(Shape))]
//! struct Circle { radius: f64 }
//!
//! const _: () = assert!(is_class::<Circle>());
//! const _: () = assert!(is_base_of::<Shape, Circle>());
//! const _: () = assert!(is_same::<RemoveCv<ConstVolatile<u8>>, u8>());
//! ```

// Allow `::type_trait` to work inside the crate itself
extern crate self as type_trait;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the predicate generators
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Reflection
// =============================================================================
pub mod reflect;

// =============================================================================
// Layer 2: Queries
// =============================================================================
pub mod traits;

// =============================================================================
// Layer 3: Detection
// =============================================================================
#[cfg(feature = "detect")]
pub mod detect;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::{
    And, Bool, BoolConstant, CharConstant, Conditional, ConditionalT, FalseType, I8Constant,
    I16Constant, I32Constant, I64Constant, I128Constant, IntegralConstant, IsizeConstant, Not, Or,
    TrueType, U8Constant, U16Constant, U32Constant, U64Constant, U128Constant, UsizeConstant,
};
pub use reflect::{
    AdtDesc, AdtKind, Arithmetic, BoundedArrayTag, Category, ClassTag, Const, ConstVolatile,
    EnumTag, FloatingPointTag, FnDesc, FunctionTag, IntegralTag, Introspect, LvalueReferenceTag,
    MemberPointerTag, MemberPtr, NullPointerTag, NullPtr, PointerTag, RefKind, RvalueRef,
    RvalueReferenceTag, TypeDesc, UnboundedArrayTag, UnionTag, Volatile, VoidTag,
};
pub use traits::*;

// Re-export the derive
pub use macros::Introspect;

// =============================================================================
// Declarative Macro Bridge for #[derive(Introspect)]
// =============================================================================
//
// The derive and the library tables describe only the category and the
// descriptor; this bridge fills in the transforms shared by every type
// without qualifiers, references or extents. Expanding through a decl-macro
// also lets `module_path!()` resolve at the deriving site.

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use #[derive(Introspect)] instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_introspect {
    (
        impl [$($params:tt)*] $ty:ty where [$($bounds:tt)*] {
            category: $category:ty,
            desc: $desc:expr $(,)?
        }
    ) => {
        impl<$($params)*> $crate::Introspect for $ty where $($bounds)* {
            type Category = $category;
            type IsConst = $crate::FalseType;
            type IsVolatile = $crate::FalseType;
            type RemoveConst = Self;
            type RemoveVolatile = Self;
            type RemoveCv = Self;
            type AddConst = $crate::Const<Self>;
            type AddVolatile = $crate::Volatile<Self>;
            type AddCv = $crate::ConstVolatile<Self>;
            type RemoveReference = Self;
            type AddLvalueReference = &'static Self;
            type AddRvalueReference = $crate::RvalueRef<Self>;
            type RemovePointer = Self;
            type AddPointer = *mut Self;
            type RemoveExtent = Self;
            type RemoveAllExtents = Self;
            const DESC: &'static $crate::TypeDesc = $desc;
        }
    };
}

/// Common items for type queries.
pub mod prelude {
    pub use crate::primitives::{Bool, Conditional, ConditionalT, FalseType, IntegralConstant, TrueType};
    pub use crate::reflect::{Const, ConstVolatile, Introspect, MemberPtr, NullPtr, RvalueRef, Volatile};
    pub use crate::traits::*;
    pub use macros::Introspect;
    #[cfg(feature = "detect")]
    pub use crate::{has_method, has_trait};
}
