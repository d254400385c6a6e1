//! Pointer transforms.

use crate::reflect::Introspect;

/// One `*const`/`*mut` layer removed, including from a qualified pointer:
/// `RemovePointer<Const<*mut T>>` is `T`. Non-pointers are unchanged.
pub type RemovePointer<T> = <T as Introspect>::RemovePointer;

/// `*mut T`, or `*mut U` when `T` is a reference to `U`.
pub type AddPointer<T> = <T as Introspect>::AddPointer;
