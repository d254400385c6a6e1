//! Fundamental types: `()`, `NullPtr`, integral and floating point types.

use super::category::{FloatingPointTag, IntegralTag, NullPointerTag, VoidTag};
use super::desc::TypeDesc;
use super::qualifier::{Const, ConstVolatile, Volatile};
use super::Introspect;
use crate::primitives::bool::Bool;
use crate::primitives::constant::{BoolConstant, FalseType};

/// The type of the null pointer literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullPtr;

crate::__impl_introspect! {
    impl [] NullPtr where [] {
        category: NullPointerTag,
        desc: &TypeDesc::NullPointer,
    }
}

// `()` is void: it has no references, and a reference to it is itself.
impl Introspect for () {
    type Category = VoidTag;
    type IsConst = FalseType;
    type IsVolatile = FalseType;
    type RemoveConst = Self;
    type RemoveVolatile = Self;
    type RemoveCv = Self;
    type AddConst = Const<Self>;
    type AddVolatile = Volatile<Self>;
    type AddCv = ConstVolatile<Self>;
    type RemoveReference = Self;
    type AddLvalueReference = Self;
    type AddRvalueReference = Self;
    type RemovePointer = Self;
    type AddPointer = *mut Self;
    type RemoveExtent = Self;
    type RemoveAllExtents = Self;
    const DESC: &'static TypeDesc = &TypeDesc::Void;
}

/// Arithmetic types and their signedness.
///
/// Signedness is decided by converting `-1` and `0` into the type and
/// comparing them, all inside a const argument. Only arithmetic types
/// implement this trait, so the conversion is never formed for any other
/// type.
pub trait Arithmetic: Introspect {
    type Signed: Bool;
}

macro_rules! impl_arithmetic {
    ($tag:ty => $($t:ident),* $(,)?) => {
        $(
            crate::__impl_introspect! {
                impl [] $t where [] {
                    category: $tag,
                    desc: &TypeDesc::Primitive(stringify!($t)),
                }
            }

            impl Arithmetic for $t {
                type Signed = BoolConstant<{ (-1i128 as $t) < (0 as $t) }>;
            }
        )*
    };
}

impl_arithmetic!(IntegralTag => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_arithmetic!(FloatingPointTag => f32, f64);

crate::__impl_introspect! {
    impl [] bool where [] {
        category: IntegralTag,
        desc: &TypeDesc::Primitive("bool"),
    }
}

// -1 converts to `true`.
impl Arithmetic for bool {
    type Signed = BoolConstant<{ (-1i128 != 0) < (0i128 != 0) }>;
}

crate::__impl_introspect! {
    impl [] char where [] {
        category: IntegralTag,
        desc: &TypeDesc::Primitive("char"),
    }
}

// Compared by scalar value.
impl Arithmetic for char {
    type Signed = BoolConstant<{ (-1i128 as u32) < (0i128 as u32) }>;
}
