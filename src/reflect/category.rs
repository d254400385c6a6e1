//! Primary type categories.
//!
//! Every introspectable type names exactly one category tag. A tag answers
//! all primary predicates at once: each is a [`Bool`] associated type, so a
//! predicate is a single projection and never needs a fallback impl.

use core::marker::PhantomData;

use crate::primitives::bool::Bool;
use crate::primitives::constant::{FalseType, TrueType};

/// The row of primary-category answers for one kind of type.
pub trait Category: 'static {
    type Void: Bool;
    type NullPointer: Bool;
    type Integral: Bool;
    type FloatingPoint: Bool;
    type Array: Bool;
    type Enum: Bool;
    type Union: Bool;
    type Class: Bool;
    type Function: Bool;
    type Pointer: Bool;
    type LvalueReference: Bool;
    type RvalueReference: Bool;
    type MemberObjectPointer: Bool;
    type MemberFunctionPointer: Bool;
    type BoundedArray: Bool;
    type UnboundedArray: Bool;
}

/// Expands one tag per row. `Y`/`N` columns follow the order of
/// [`Category`]'s associated types.
macro_rules! category_table {
    (@bit Y) => { TrueType };
    (@bit N) => { FalseType };
    ($(
        $(#[$doc:meta])*
        $tag:ident => [
            $void:ident $null:ident $int:ident $float:ident
            $arr:ident $enm:ident $uni:ident $cls:ident
            $func:ident $ptr:ident $lref:ident $rref:ident
            $mobj:ident $mfn:ident $bnd:ident $unb:ident
        ]
    ),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $tag;

            impl Category for $tag {
                type Void = category_table!(@bit $void);
                type NullPointer = category_table!(@bit $null);
                type Integral = category_table!(@bit $int);
                type FloatingPoint = category_table!(@bit $float);
                type Array = category_table!(@bit $arr);
                type Enum = category_table!(@bit $enm);
                type Union = category_table!(@bit $uni);
                type Class = category_table!(@bit $cls);
                type Function = category_table!(@bit $func);
                type Pointer = category_table!(@bit $ptr);
                type LvalueReference = category_table!(@bit $lref);
                type RvalueReference = category_table!(@bit $rref);
                type MemberObjectPointer = category_table!(@bit $mobj);
                type MemberFunctionPointer = category_table!(@bit $mfn);
                type BoundedArray = category_table!(@bit $bnd);
                type UnboundedArray = category_table!(@bit $unb);
            }
        )*
    };
}

//                   void null int  flt  arr  enum uni  cls  fn   ptr  lref rref mobj mfn  bnd  unb
category_table! {
    /// `()`
    VoidTag => [Y N N N  N N N N  N N N N  N N N N],
    /// `NullPtr`
    NullPointerTag => [N Y N N  N N N N  N N N N  N N N N],
    /// `bool`, `char` and the integer types.
    IntegralTag => [N N Y N  N N N N  N N N N  N N N N],
    /// `f32`, `f64`
    FloatingPointTag => [N N N Y  N N N N  N N N N  N N N N],
    /// `[T; N]`
    BoundedArrayTag => [N N N N  Y N N N  N N N N  N N Y N],
    /// `[T]`
    UnboundedArrayTag => [N N N N  Y N N N  N N N N  N N N Y],
    /// Fieldless enums.
    EnumTag => [N N N N  N Y N N  N N N N  N N N N],
    /// Unions.
    UnionTag => [N N N N  N N Y N  N N N N  N N N N],
    /// Structs, data-carrying enums and tuples.
    ClassTag => [N N N N  N N N Y  N N N N  N N N N],
    /// `fn(..) -> R` in every ABI and safety.
    FunctionTag => [N N N N  N N N N  Y N N N  N N N N],
    /// `*const T`, `*mut T`
    PointerTag => [N N N N  N N N N  N Y N N  N N N N],
    /// `&T`, `&mut T`
    LvalueReferenceTag => [N N N N  N N N N  N N Y N  N N N N],
    /// `RvalueRef<T>`
    RvalueReferenceTag => [N N N N  N N N N  N N N Y  N N N N],
}

/// Category of `MemberPtr<M, C>`. `F` is whether the member is a function,
/// which splits member pointers into object and function pointers.
pub struct MemberPointerTag<F>(PhantomData<F>);

impl<F: Bool> Category for MemberPointerTag<F> {
    type Void = FalseType;
    type NullPointer = FalseType;
    type Integral = FalseType;
    type FloatingPoint = FalseType;
    type Array = FalseType;
    type Enum = FalseType;
    type Union = FalseType;
    type Class = FalseType;
    type Function = FalseType;
    type Pointer = FalseType;
    type LvalueReference = FalseType;
    type RvalueReference = FalseType;
    type MemberObjectPointer = F::Not;
    type MemberFunctionPointer = F;
    type BoundedArray = FalseType;
    type UnboundedArray = FalseType;
}
