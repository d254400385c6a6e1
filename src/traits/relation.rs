//! Relationships between two types: identity and inheritance.

use crate::primitives::constant::IntegralConstant;
use crate::reflect::{Introspect, TypeDesc};

/// Whether `A` and `B` are the same type, qualifiers included.
#[inline(always)]
pub const fn is_same<A: ?Sized + Introspect, B: ?Sized + Introspect>() -> bool {
    TypeDesc::same(A::DESC, B::DESC)
}

/// Whether `Derived` is `Base` or derives from it through declared bases.
///
/// Both must be class types; anything else is `false`. Qualifiers on either
/// side are ignored.
#[inline(always)]
pub const fn is_base_of<Base: ?Sized + Introspect, Derived: ?Sized + Introspect>() -> bool {
    TypeDesc::derives_from(Derived::DESC, Base::DESC)
}

query_struct! {
    /// Structural form of [`is_same`].
    ///
    /// Decided by const evaluation, so it is an `IntegralConstant` but not a
    /// type-level `Bool`. Use `Conditional<{ is_same::<A, B>() }, ..>` to
    /// select on it.
    IsSame<A, B>
}

impl<A: ?Sized + Introspect, B: ?Sized + Introspect> IntegralConstant for IsSame<A, B> {
    type ValueType = bool;
    const VALUE: bool = is_same::<A, B>();
    type Type = Self;
}

query_struct! {
    /// Structural form of [`is_base_of`].
    IsBaseOf<Base, Derived>
}

impl<B: ?Sized + Introspect, D: ?Sized + Introspect> IntegralConstant for IsBaseOf<B, D> {
    type ValueType = bool;
    const VALUE: bool = is_base_of::<B, D>();
    type Type = Self;
}

/// Identity as a bound: `A: SameAs<B>` holds only when `A` is `B`.
pub trait SameAs<T: ?Sized> {}

impl<T: ?Sized> SameAs<T> for T {}
