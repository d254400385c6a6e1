//! # Layer 1: Reflection
//!
//! The per-type oracle every query reads from.
//!
//! - `category.rs`: Primary category tags.
//! - `desc.rs`: Structural descriptors (identity, bases, extents).
//! - `primitive.rs`: `()`, `NullPtr`, integral and floating point types.
//! - `qualifier.rs`: `Const`, `Volatile`, `ConstVolatile` wrappers.
//! - `compound.rs`: Pointers, references, arrays, member pointers, tuples.
//! - `function.rs`: Function pointer types in every arity, ABI and safety.
//! - `std_types.rs`: Classes, enums and unions from `core`/`alloc`/`std`.
//!
//! User types join through `#[derive(Introspect)]`.

pub mod category;
pub mod compound;
pub mod desc;
pub mod function;
pub mod primitive;
pub mod qualifier;
pub mod std_types;

pub use category::{
    BoundedArrayTag, Category, ClassTag, EnumTag, FloatingPointTag, FunctionTag, IntegralTag,
    LvalueReferenceTag, MemberPointerTag, NullPointerTag, PointerTag, RvalueReferenceTag,
    UnboundedArrayTag, UnionTag, VoidTag,
};
pub use compound::{MemberPtr, RvalueRef};
pub use desc::{AdtDesc, AdtKind, FnDesc, RefKind, TypeDesc};
pub use primitive::{Arithmetic, NullPtr};
pub use qualifier::{Const, ConstVolatile, Volatile};

use crate::primitives::bool::Bool;

/// Compile-time facts about a type, and its one-step transforms.
///
/// Implemented for the primitive types, qualifier wrappers, pointers,
/// references, arrays, function pointers, member pointers, tuples and
/// common library types. User classes, unions and enums implement it with
/// `#[derive(Introspect)]`.
///
/// Every transform is itself introspectable, so transforms compose:
/// `<<T as Introspect>::RemoveReference as Introspect>::RemoveCv`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be introspected",
    label = "no type facts for `{Self}`",
    note = "derive `Introspect` for classes, unions and enums; trait objects, `str` and higher-ranked fn pointers are not modeled"
)]
pub trait Introspect: 'static {
    /// Primary category.
    type Category: Category;

    /// Top-level `const` qualifier present.
    type IsConst: Bool;

    /// Top-level `volatile` qualifier present.
    type IsVolatile: Bool;

    type RemoveConst: ?Sized + Introspect;
    type RemoveVolatile: ?Sized + Introspect;
    type RemoveCv: ?Sized + Introspect;

    /// `Self` with `const` added, merged into an existing qualifier.
    /// References and function types are returned unchanged.
    type AddConst: ?Sized + Introspect;
    type AddVolatile: ?Sized + Introspect;
    type AddCv: ?Sized + Introspect;

    /// One reference layer peeled.
    type RemoveReference: ?Sized + Introspect;

    /// `&Self`, collapsing when `Self` is already a reference.
    type AddLvalueReference: ?Sized + Introspect;

    /// `RvalueRef<Self>`, collapsing `&T` to `&T`.
    type AddRvalueReference: ?Sized + Introspect;

    /// One pointer layer peeled, looking through a top-level qualifier.
    type RemovePointer: ?Sized + Introspect;

    /// `*mut` to `Self`, or to the referent when `Self` is a reference.
    type AddPointer: Introspect;

    /// One array dimension peeled. The element keeps the array's qualifiers.
    type RemoveExtent: ?Sized + Introspect;

    /// Every array dimension peeled.
    type RemoveAllExtents: ?Sized + Introspect;

    /// Structural description of `Self`.
    const DESC: &'static TypeDesc;
}
