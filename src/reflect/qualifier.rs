//! Const/volatile qualifier wrappers.
//!
//! Rust has no qualified types, so `T const` is spelled `Const<T>`. Every
//! query looks through the wrapper except the qualifier queries themselves.
//! One wrapper layer is canonical; `AddConst<Volatile<T>>` yields
//! `ConstVolatile<T>`, never a nested pair. Nested wrappers written by hand
//! or reached through generics (`Const<T>` with `T = Const<U>`) describe the
//! same type as their merged form, and the transforms return merged forms.

use core::marker::PhantomData;

use super::category::Category;
use super::compound::RvalueRef;
use super::desc::TypeDesc;
use super::Introspect;
use crate::primitives::bool::Bool;
use crate::primitives::constant::TrueType;

/// `T const`
pub struct Const<T: ?Sized>(PhantomData<T>);

/// `T volatile`
pub struct Volatile<T: ?Sized>(PhantomData<T>);

/// `T const volatile`
pub struct ConstVolatile<T: ?Sized>(PhantomData<T>);

type Cat<T> = <T as Introspect>::Category;
type IsPointerOf<T> = <Cat<T> as Category>::Pointer;
type IsVoidOf<T> = <Cat<T> as Category>::Void;

type AddCvOf<T> = <<T as Introspect>::RemoveCv as Introspect>::AddCv;

impl<T: ?Sized + Introspect> Introspect for Const<T> {
    type Category = T::Category;
    type IsConst = TrueType;
    type IsVolatile = T::IsVolatile;
    type RemoveConst = T::RemoveConst;
    type RemoveVolatile = <T::RemoveVolatile as Introspect>::AddConst;
    type RemoveCv = T::RemoveCv;
    type AddConst = <T::RemoveConst as Introspect>::AddConst;
    type AddVolatile = AddCvOf<T>;
    type AddCv = AddCvOf<T>;
    type RemoveReference = Self;
    type AddLvalueReference = <IsVoidOf<T> as Bool>::Pick<Self, &'static Self>;
    type AddRvalueReference = <IsVoidOf<T> as Bool>::Pick<Self, RvalueRef<Self>>;
    type RemovePointer = <IsPointerOf<T> as Bool>::Pick<T::RemovePointer, Self>;
    type AddPointer = *mut Self;
    type RemoveExtent = <T::RemoveExtent as Introspect>::AddConst;
    type RemoveAllExtents = <T::RemoveAllExtents as Introspect>::AddConst;
    const DESC: &'static TypeDesc = &TypeDesc::qualified(true, false, T::DESC);
}

impl<T: ?Sized + Introspect> Introspect for Volatile<T> {
    type Category = T::Category;
    type IsConst = T::IsConst;
    type IsVolatile = TrueType;
    type RemoveConst = <T::RemoveConst as Introspect>::AddVolatile;
    type RemoveVolatile = T::RemoveVolatile;
    type RemoveCv = T::RemoveCv;
    type AddConst = AddCvOf<T>;
    type AddVolatile = <T::RemoveVolatile as Introspect>::AddVolatile;
    type AddCv = AddCvOf<T>;
    type RemoveReference = Self;
    type AddLvalueReference = <IsVoidOf<T> as Bool>::Pick<Self, &'static Self>;
    type AddRvalueReference = <IsVoidOf<T> as Bool>::Pick<Self, RvalueRef<Self>>;
    type RemovePointer = <IsPointerOf<T> as Bool>::Pick<T::RemovePointer, Self>;
    type AddPointer = *mut Self;
    type RemoveExtent = <T::RemoveExtent as Introspect>::AddVolatile;
    type RemoveAllExtents = <T::RemoveAllExtents as Introspect>::AddVolatile;
    const DESC: &'static TypeDesc = &TypeDesc::qualified(false, true, T::DESC);
}

impl<T: ?Sized + Introspect> Introspect for ConstVolatile<T> {
    type Category = T::Category;
    type IsConst = TrueType;
    type IsVolatile = TrueType;
    type RemoveConst = <T::RemoveCv as Introspect>::AddVolatile;
    type RemoveVolatile = <T::RemoveCv as Introspect>::AddConst;
    type RemoveCv = T::RemoveCv;
    type AddConst = AddCvOf<T>;
    type AddVolatile = AddCvOf<T>;
    type AddCv = AddCvOf<T>;
    type RemoveReference = Self;
    type AddLvalueReference = <IsVoidOf<T> as Bool>::Pick<Self, &'static Self>;
    type AddRvalueReference = <IsVoidOf<T> as Bool>::Pick<Self, RvalueRef<Self>>;
    type RemovePointer = <IsPointerOf<T> as Bool>::Pick<T::RemovePointer, Self>;
    type AddPointer = *mut Self;
    type RemoveExtent = <T::RemoveExtent as Introspect>::AddCv;
    type RemoveAllExtents = <T::RemoveAllExtents as Introspect>::AddCv;
    const DESC: &'static TypeDesc = &TypeDesc::qualified(true, true, T::DESC);
}
