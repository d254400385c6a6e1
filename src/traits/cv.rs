//! Const/volatile qualifier transforms.
//!
//! Only the top-level qualifier is touched:
//! `RemoveConst<Const<*mut Const<i32>>>` is `*mut Const<i32>`.

use crate::reflect::Introspect;

/// `T` without a top-level `const`.
pub type RemoveConst<T> = <T as Introspect>::RemoveConst;

/// `T` without a top-level `volatile`.
pub type RemoveVolatile<T> = <T as Introspect>::RemoveVolatile;

/// `T` without either top-level qualifier.
pub type RemoveCv<T> = <T as Introspect>::RemoveCv;

/// `T const`. References and function types are unchanged.
pub type AddConst<T> = <T as Introspect>::AddConst;

/// `T volatile`. References and function types are unchanged.
pub type AddVolatile<T> = <T as Introspect>::AddVolatile;

/// `T const volatile`. References and function types are unchanged.
pub type AddCv<T> = <T as Introspect>::AddCv;
