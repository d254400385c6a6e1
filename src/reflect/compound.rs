//! Pointers, references, arrays, member pointers and tuples.

use core::marker::PhantomData;

use super::category::{
    BoundedArrayTag, Category, ClassTag, LvalueReferenceTag, MemberPointerTag, PointerTag,
    RvalueReferenceTag, UnboundedArrayTag,
};
use super::desc::{AdtDesc, AdtKind, RefKind, TypeDesc};
use super::qualifier::{Const, ConstVolatile, Volatile};
use super::Introspect;
use crate::primitives::constant::FalseType;

/// `T&&`: an rvalue reference to `T`.
pub struct RvalueRef<T: ?Sized>(PhantomData<T>);

/// `M C::*`: a pointer to a member of class `C` with type `M`.
///
/// A function member type makes it a member function pointer.
pub struct MemberPtr<M: ?Sized, C: ?Sized>(PhantomData<*const M>, PhantomData<*const C>);

macro_rules! impl_pointer {
    ($($ptr:tt => $mutable:literal),* $(,)?) => {
        $(
            impl<T: ?Sized + Introspect> Introspect for *$ptr T {
                type Category = PointerTag;
                type IsConst = FalseType;
                type IsVolatile = FalseType;
                type RemoveConst = Self;
                type RemoveVolatile = Self;
                type RemoveCv = Self;
                type AddConst = Const<Self>;
                type AddVolatile = Volatile<Self>;
                type AddCv = ConstVolatile<Self>;
                type RemoveReference = Self;
                type AddLvalueReference = &'static Self;
                type AddRvalueReference = RvalueRef<Self>;
                type RemovePointer = T;
                type AddPointer = *mut Self;
                type RemoveExtent = Self;
                type RemoveAllExtents = Self;
                const DESC: &'static TypeDesc =
                    &TypeDesc::Pointer { mutable: $mutable, pointee: T::DESC };
            }
        )*
    };
}

impl_pointer!(const => false, mut => true);

// References cannot be qualified; adding a qualifier leaves them as is.
macro_rules! impl_reference {
    ($($kind:ident: [$($ty:tt)+] => $tag:ty, lvalue = $lvalue:ty),* $(,)?) => {
        $(
            impl<T: ?Sized + Introspect> Introspect for $($ty)+ {
                type Category = $tag;
                type IsConst = FalseType;
                type IsVolatile = FalseType;
                type RemoveConst = Self;
                type RemoveVolatile = Self;
                type RemoveCv = Self;
                type AddConst = Self;
                type AddVolatile = Self;
                type AddCv = Self;
                type RemoveReference = T;
                type AddLvalueReference = $lvalue;
                type AddRvalueReference = Self;
                type RemovePointer = Self;
                type AddPointer = *mut T;
                type RemoveExtent = Self;
                type RemoveAllExtents = Self;
                const DESC: &'static TypeDesc =
                    &TypeDesc::Reference { kind: RefKind::$kind, referent: T::DESC };
            }
        )*
    };
}

impl_reference! {
    Shared: [&'static T] => LvalueReferenceTag, lvalue = Self,
    Mutable: [&'static mut T] => LvalueReferenceTag, lvalue = Self,
    Rvalue: [RvalueRef<T>] => RvalueReferenceTag, lvalue = &'static T,
}

impl<T: Introspect, const N: usize> Introspect for [T; N] {
    type Category = BoundedArrayTag;
    type IsConst = FalseType;
    type IsVolatile = FalseType;
    type RemoveConst = Self;
    type RemoveVolatile = Self;
    type RemoveCv = Self;
    type AddConst = Const<Self>;
    type AddVolatile = Volatile<Self>;
    type AddCv = ConstVolatile<Self>;
    type RemoveReference = Self;
    type AddLvalueReference = &'static Self;
    type AddRvalueReference = RvalueRef<Self>;
    type RemovePointer = Self;
    type AddPointer = *mut Self;
    type RemoveExtent = T;
    type RemoveAllExtents = T::RemoveAllExtents;
    const DESC: &'static TypeDesc = &TypeDesc::Array { element: T::DESC, len: Some(N) };
}

impl<T: Introspect> Introspect for [T] {
    type Category = UnboundedArrayTag;
    type IsConst = FalseType;
    type IsVolatile = FalseType;
    type RemoveConst = Self;
    type RemoveVolatile = Self;
    type RemoveCv = Self;
    type AddConst = Const<Self>;
    type AddVolatile = Volatile<Self>;
    type AddCv = ConstVolatile<Self>;
    type RemoveReference = Self;
    type AddLvalueReference = &'static Self;
    type AddRvalueReference = RvalueRef<Self>;
    type RemovePointer = Self;
    type AddPointer = *mut Self;
    type RemoveExtent = T;
    type RemoveAllExtents = T::RemoveAllExtents;
    const DESC: &'static TypeDesc = &TypeDesc::Array { element: T::DESC, len: None };
}

impl<M: ?Sized + Introspect, C: ?Sized + Introspect> Introspect for MemberPtr<M, C> {
    type Category = MemberPointerTag<<M::Category as Category>::Function>;
    type IsConst = FalseType;
    type IsVolatile = FalseType;
    type RemoveConst = Self;
    type RemoveVolatile = Self;
    type RemoveCv = Self;
    type AddConst = Const<Self>;
    type AddVolatile = Volatile<Self>;
    type AddCv = ConstVolatile<Self>;
    type RemoveReference = Self;
    type AddLvalueReference = &'static Self;
    type AddRvalueReference = RvalueRef<Self>;
    type RemovePointer = Self;
    type AddPointer = *mut Self;
    type RemoveExtent = Self;
    type RemoveAllExtents = Self;
    const DESC: &'static TypeDesc = &TypeDesc::MemberPointer { member: M::DESC, class: C::DESC };
}

// Tuples are classes: aggregates with named storage.
macro_rules! impl_tuples {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            crate::__impl_introspect! {
                impl [$($name: Introspect),+] ($($name,)+) where [] {
                    category: ClassTag,
                    desc: &TypeDesc::Adt(AdtDesc {
                        kind: AdtKind::Class,
                        path: "tuple",
                        args: &[$(<$name as Introspect>::DESC),+],
                        consts: &[],
                        site: "",
                        bases: &[],
                    }),
                }
            }
        )*
    };
}

impl_tuples! {
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
}
