//! # Layer 2: Queries
//!
//! Each predicate comes in two forms:
//!
//! - Structural: a type implementing `IntegralConstant`, e.g. `IsIntegral<T>`.
//!   Category predicates are also type-level [`Bool`](crate::Bool)s and can
//!   drive `ConditionalT`.
//! - Value: a `const fn`, e.g. `is_integral::<T>()`.
//!
//! Transforms are type aliases, e.g. `RemoveConst<T>`.

/// Generate the value form `is_xxx::<T>()` of each structural predicate
/// `IsXxx<T>`.
macro_rules! value_fns {
    ($($alias:ident),* $(,)?) => {
        $crate::paste::paste! {
            $(
                #[doc = "Value form of [`" $alias "`]."]
                #[inline(always)]
                pub const fn [<$alias:snake>]<T: ?Sized + Introspect>() -> bool {
                    <$alias<T> as IntegralConstant>::VALUE
                }
            )*
        }
    };
}

/// A zero-sized query type over unsized parameters. Derives would demand
/// the parameters themselves be `Copy`/`Default`, so the impls are spelled out.
macro_rules! query_struct {
    (
        $(#[$doc:meta])*
        $name:ident<$($p:ident),+ $(; const $n:ident: $nt:ty)?>
    ) => {
        $(#[$doc])*
        pub struct $name<$($p: ?Sized),+ $(, const $n: $nt)?>(
            core::marker::PhantomData<fn() -> ($(*const $p,)+)>,
        );

        impl<$($p: ?Sized),+ $(, const $n: $nt)?> Clone for $name<$($p),+ $(, $n)?> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($p: ?Sized),+ $(, const $n: $nt)?> Copy for $name<$($p),+ $(, $n)?> {}

        impl<$($p: ?Sized),+ $(, const $n: $nt)?> Default for $name<$($p),+ $(, $n)?> {
            fn default() -> Self {
                $name(core::marker::PhantomData)
            }
        }

        impl<$($p: ?Sized),+ $(, const $n: $nt)?> core::fmt::Debug for $name<$($p),+ $(, $n)?> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(stringify!($name))
            }
        }
    };
}

pub mod array;
pub mod composite;
pub mod cv;
pub mod misc;
pub mod pointer;
pub mod primary;
pub mod property;
pub mod reference;
pub mod relation;

pub use array::*;
pub use composite::*;
pub use cv::*;
pub use misc::*;
pub use pointer::*;
pub use primary::*;
pub use property::*;
pub use reference::*;
pub use relation::*;
