//! Type-level boolean logic.
//!
//! [`TrueType`] and [`FalseType`] double as the two values of a type-level
//! boolean algebra. Selection and connectives are generic associated types,
//! so the branch that is not taken is never resolved.

use super::constant::{BoolConstant, FalseType, IntegralConstant, TrueType};
use crate::reflect::Introspect;

/// Type-level boolean.
pub trait Bool: IntegralConstant<ValueType = bool> {
    /// Type-level conditional: `If<Then, Else>` (general type selector).
    type If<Then: ?Sized, Else: ?Sized>: ?Sized;

    /// Like [`If`](Self::If), but the result is known to be introspectable.
    /// Transforms select with this so their outputs can be queried further.
    type Pick<Then: ?Sized + Introspect, Else: ?Sized + Introspect>: ?Sized + Introspect;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

impl Bool for TrueType {
    type If<Then: ?Sized, Else: ?Sized> = Then;
    type Pick<Then: ?Sized + Introspect, Else: ?Sized + Introspect> = Then;

    type And<Other: Bool> = Other;
    type Or<Other: Bool> = TrueType;
    type Not = FalseType;
}

impl Bool for FalseType {
    type If<Then: ?Sized, Else: ?Sized> = Else;
    type Pick<Then: ?Sized + Introspect, Else: ?Sized + Introspect> = Else;

    type And<Other: Bool> = FalseType;
    type Or<Other: Bool> = Other;
    type Not = TrueType;
}

/// `T` if `B` holds, otherwise `U`. Only the chosen type is resolved.
pub type Conditional<const B: bool, T, U> = <BoolConstant<B> as Bool>::If<T, U>;

/// [`Conditional`] driven by a type-level boolean, typically a predicate
/// result such as `IsIntegral<X>`.
pub type ConditionalT<B, T, U> = <B as Bool>::If<T, U>;

pub type And<A, B> = <A as Bool>::And<B>;
pub type Or<A, B> = <A as Bool>::Or<B>;
pub type Not<A> = <A as Bool>::Not;
