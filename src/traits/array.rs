//! Array extent transforms.
//!
//! `RemoveAllExtents` recurses one dimension per step and stops at the
//! first non-array, so it is a fixed point on its own output.
//! [`TypeDesc::remove_all_extents`](crate::TypeDesc::remove_all_extents)
//! is the same walk as a loop over descriptors.

use crate::reflect::Introspect;

/// One dimension removed. The element keeps the array's qualifiers:
/// `RemoveExtent<Const<[i32; 3]>>` is `Const<i32>`.
pub type RemoveExtent<T> = <T as Introspect>::RemoveExtent;

/// Every dimension removed.
pub type RemoveAllExtents<T> = <T as Introspect>::RemoveAllExtents;
