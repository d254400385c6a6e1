//! Selection, overload gating and decay.

use crate::primitives::bool::Bool;
use crate::primitives::constant::{BoolConstant, TrueType};

use super::array::RemoveExtent;
use super::cv::RemoveCv;
use super::pointer::AddPointer;
use super::primary::{IsArray, IsFunction};
use super::reference::RemoveReference;

pub use crate::primitives::bool::{Conditional, ConditionalT};

/// Names `T` only when the condition is `TrueType`.
///
/// As a `where` bound (`where IsIntegral<T>: EnableIf`) it removes an impl
/// from consideration for types that fail the condition instead of making
/// the program ill-formed.
#[diagnostic::on_unimplemented(
    message = "`EnableIf` requires a true condition, found `{Self}`",
    label = "condition does not hold"
)]
pub trait EnableIf<T: ?Sized = ()> {
    type Type: ?Sized;
}

impl<T: ?Sized> EnableIf<T> for TrueType {
    type Type = T;
}

/// `T` when the type-level condition `B` holds.
pub type EnableIfT<B, T = ()> = <B as EnableIf<T>>::Type;

/// `T` when the const condition `B` holds.
pub type EnableIfC<const B: bool, T = ()> = <BoolConstant<B> as EnableIf<T>>::Type;

/// The type a value of `T` has when passed by value: references and
/// qualifiers are dropped, arrays become pointers to their element, and
/// functions become pointers to themselves.
pub type Decay<T> = <IsArray<RemoveReference<T>> as Bool>::Pick<
    AddPointer<RemoveExtent<RemoveReference<T>>>,
    <IsFunction<RemoveReference<T>> as Bool>::Pick<
        AddPointer<RemoveReference<T>>,
        RemoveCv<RemoveReference<T>>,
    >,
>;
