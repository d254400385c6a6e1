//! Type properties: qualifiers, signedness, array shape.

use crate::primitives::bool::{Bool, Not};
use crate::primitives::constant::{FalseType, IntegralConstant, TrueType};
use crate::reflect::{Arithmetic, Category, Introspect};

use super::composite::IsArithmetic;

/// Top-level `const`.
pub type IsConst<T> = <T as Introspect>::IsConst;

/// Top-level `volatile`.
pub type IsVolatile<T> = <T as Introspect>::IsVolatile;

/// `[T; N]`, including `N == 0`.
pub type IsBoundedArray<T> = <<T as Introspect>::Category as Category>::BoundedArray;

/// `[T]`
pub type IsUnboundedArray<T> = <<T as Introspect>::Category as Category>::UnboundedArray;

value_fns! {
    IsConst,
    IsVolatile,
    IsBoundedArray,
    IsUnboundedArray,
}

/// Routes the signedness question on whether `T` is arithmetic.
///
/// Implemented by `TrueType` (ask the arithmetic type) and `FalseType`
/// (answer false), so the `-1 < 0` comparison is only ever formed for
/// arithmetic types.
pub trait SignDispatch<T: ?Sized> {
    type Signed: Bool;
    type Unsigned: Bool;
}

impl<T: ?Sized + Introspect> SignDispatch<T> for TrueType
where
    T::RemoveCv: Arithmetic,
{
    type Signed = <T::RemoveCv as Arithmetic>::Signed;
    type Unsigned = Not<<T::RemoveCv as Arithmetic>::Signed>;
}

impl<T: ?Sized> SignDispatch<T> for FalseType {
    type Signed = FalseType;
    type Unsigned = FalseType;
}

/// Arithmetic and `T(-1) < T(0)`. Floating point types are signed.
pub type IsSigned<T> = <IsArithmetic<T> as SignDispatch<T>>::Signed;

/// Arithmetic and not signed. `bool` and `char` are unsigned.
pub type IsUnsigned<T> = <IsArithmetic<T> as SignDispatch<T>>::Unsigned;

/// Value form of [`IsSigned`].
#[inline(always)]
pub const fn is_signed<T: ?Sized + Introspect>() -> bool
where
    IsArithmetic<T>: SignDispatch<T>,
{
    <IsSigned<T> as IntegralConstant>::VALUE
}

/// Value form of [`IsUnsigned`].
#[inline(always)]
pub const fn is_unsigned<T: ?Sized + Introspect>() -> bool
where
    IsArithmetic<T>: SignDispatch<T>,
{
    <IsUnsigned<T> as IntegralConstant>::VALUE
}

query_struct! {
    /// Number of array dimensions of `T`; 0 for non-arrays.
    Rank<T>
}

impl<T: ?Sized + Introspect> IntegralConstant for Rank<T> {
    type ValueType = usize;
    const VALUE: usize = T::DESC.rank();
    type Type = Self;
}

/// Value form of [`Rank`].
#[inline(always)]
pub const fn rank<T: ?Sized + Introspect>() -> usize {
    T::DESC.rank()
}

query_struct! {
    /// Length of dimension `N` of `T`; 0 when that dimension is unbounded or
    /// missing.
    Extent<T; const N: usize>
}

impl<T: ?Sized + Introspect, const N: usize> IntegralConstant for Extent<T, N> {
    type ValueType = usize;
    const VALUE: usize = T::DESC.extent(N);
    type Type = Self;
}

/// Value form of [`Extent`].
#[inline(always)]
pub const fn extent<T: ?Sized + Introspect, const N: usize>() -> usize {
    T::DESC.extent(N)
}
