//! Composite predicates: boolean algebra over the primary categories.

use crate::primitives::bool::{Not, Or};
use crate::primitives::constant::IntegralConstant;
use crate::reflect::Introspect;

use super::primary::{
    IsArray, IsClass, IsEnum, IsFloatingPoint, IsIntegral, IsLvalueReference,
    IsMemberFunctionPointer, IsMemberObjectPointer, IsNullPointer, IsPointer, IsRvalueReference,
    IsUnion, IsVoid,
};

/// integral | floating point
pub type IsArithmetic<T> = Or<IsIntegral<T>, IsFloatingPoint<T>>;

/// arithmetic | void | null pointer
pub type IsFundamental<T> = Or<IsArithmetic<T>, Or<IsVoid<T>, IsNullPointer<T>>>;

/// member object pointer | member function pointer
pub type IsMemberPointer<T> = Or<IsMemberObjectPointer<T>, IsMemberFunctionPointer<T>>;

/// arithmetic | enum | pointer | member pointer | null pointer
pub type IsScalar<T> =
    Or<IsArithmetic<T>, Or<IsEnum<T>, Or<IsPointer<T>, Or<IsMemberPointer<T>, IsNullPointer<T>>>>>;

/// scalar | array | union | class
pub type IsObject<T> = Or<IsScalar<T>, Or<IsArray<T>, Or<IsUnion<T>, IsClass<T>>>>;

/// Not fundamental.
pub type IsCompound<T> = Not<IsFundamental<T>>;

/// lvalue reference | rvalue reference
pub type IsReference<T> = Or<IsLvalueReference<T>, IsRvalueReference<T>>;

value_fns! {
    IsArithmetic,
    IsFundamental,
    IsMemberPointer,
    IsScalar,
    IsObject,
    IsCompound,
    IsReference,
}
