//! Primary category predicates.
//!
//! Exactly one of these holds for any introspectable type. Qualifiers are
//! transparent: `IsIntegral<Const<i32>>` holds.

use crate::primitives::constant::IntegralConstant;
use crate::reflect::{Category, Introspect};

type Cat<T> = <T as Introspect>::Category;

pub type IsVoid<T> = <Cat<T> as Category>::Void;
pub type IsNullPointer<T> = <Cat<T> as Category>::NullPointer;
/// `bool`, `char` and the integer types.
pub type IsIntegral<T> = <Cat<T> as Category>::Integral;
pub type IsFloatingPoint<T> = <Cat<T> as Category>::FloatingPoint;
/// `[T; N]` and `[T]`.
pub type IsArray<T> = <Cat<T> as Category>::Array;
/// Fieldless enums.
pub type IsEnum<T> = <Cat<T> as Category>::Enum;
pub type IsUnion<T> = <Cat<T> as Category>::Union;
/// Structs, data-carrying enums and tuples.
pub type IsClass<T> = <Cat<T> as Category>::Class;
/// `fn(..) -> R` types.
pub type IsFunction<T> = <Cat<T> as Category>::Function;
/// `*const T` and `*mut T`.
pub type IsPointer<T> = <Cat<T> as Category>::Pointer;
/// `&T` and `&mut T`.
pub type IsLvalueReference<T> = <Cat<T> as Category>::LvalueReference;
/// `RvalueRef<T>`.
pub type IsRvalueReference<T> = <Cat<T> as Category>::RvalueReference;
pub type IsMemberObjectPointer<T> = <Cat<T> as Category>::MemberObjectPointer;
pub type IsMemberFunctionPointer<T> = <Cat<T> as Category>::MemberFunctionPointer;

value_fns! {
    IsVoid,
    IsNullPointer,
    IsIntegral,
    IsFloatingPoint,
    IsArray,
    IsEnum,
    IsUnion,
    IsClass,
    IsFunction,
    IsPointer,
    IsLvalueReference,
    IsRvalueReference,
    IsMemberObjectPointer,
    IsMemberFunctionPointer,
}
