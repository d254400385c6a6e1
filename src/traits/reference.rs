//! Reference transforms.

use crate::reflect::Introspect;

use super::cv::RemoveCv;

/// One `&`, `&mut` or `RvalueRef` layer removed.
pub type RemoveReference<T> = <T as Introspect>::RemoveReference;

/// `&T`. An rvalue reference collapses to `&T`, `&T` stays, `()` stays.
pub type AddLvalueReference<T> = <T as Introspect>::AddLvalueReference;

/// `RvalueRef<T>`. `&T` stays `&T`, `()` stays.
pub type AddRvalueReference<T> = <T as Introspect>::AddRvalueReference;

/// Reference and then top-level qualifiers removed.
pub type RemoveCvref<T> = RemoveCv<RemoveReference<T>>;
