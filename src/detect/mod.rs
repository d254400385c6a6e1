//! # Layer 3: Detection
//!
//! Ask whether a type has a member or implements a trait, getting `false`
//! instead of a compile error when it does not.
//!
//! ## How it works
//!
//! Both macros rely on the compiler preferring one candidate over another
//! and silently discarding candidates whose bounds fail:
//!
//! - `has_trait!`: an inherent const `VALUE = true` exists on the probe only
//!   when `T: Trait`; otherwise path resolution falls through to a trait
//!   const `VALUE = false`.
//! - `has_method!`: `<T>::name` resolves to the inherent item when there is
//!   one, and to a fallback const of type [`Missing`] otherwise. Autoref
//!   method lookup then picks a `false` method for `&Missing` before it
//!   ever reaches the `true` method on `&&X`.
//! - `has_method!(T, name, in Trait)`: a method that comes from a trait is
//!   looked up through that trait. The name is checked against the trait's
//!   declaration, and the answer is whether `T` implements it.
//!
//! ## Limitation
//!
//! Only **concrete types** known at the call site. In `fn foo<T>()` the
//! bound is resolved once for the generic `T`, always yielding `false`.
//! `has_method!` does not support generic methods (their parameters cannot
//! be inferred). The plain form sees inherent items only: when a trait in
//! scope also declares the name the lookup is ambiguous, so name the trait
//! with the `in Trait` form.

/// What `has_method!` resolves to when no inherent item has the name.
#[doc(hidden)]
#[derive(Debug, Clone, Copy)]
pub struct Missing;

/// Whether a concrete type implements a trait.
///
/// ```ignore
/// assert!(has_trait!(String, Clone));
/// assert!(!has_trait!(String, Copy));
/// ```
#[macro_export]
macro_rules! has_trait {
    ($T:ty, $Trait:path) => {{
        struct __Probe<T: ?Sized>(::core::marker::PhantomData<T>);

        trait __Fallback {
            const VALUE: bool = false;
        }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $Trait> __Probe<T> {
            #[allow(dead_code)]
            const VALUE: bool = true;
        }

        <__Probe<$T>>::VALUE
    }};
}

/// Whether a concrete type has a member function with the given name.
///
/// The plain form answers for inherent members. Lookup is by name among
/// associated items, so an inherent associated constant of that name also
/// answers `true`. A method provided by a trait is asked for with
/// `in Trait`, which is `const` like [`has_trait!`].
///
/// ```ignore
/// struct Counter;
/// impl Counter { fn bump(&mut self) {} }
/// impl Iterator for Counter { type Item = u8; fn next(&mut self) -> Option<u8> { None } }
///
/// assert!(has_method!(Counter, bump));
/// assert!(!has_method!(Counter, reset));
/// assert!(has_method!(Counter, next, in Iterator));
/// assert!(!has_method!(u8, next, in Iterator));
/// ```
#[macro_export]
macro_rules! has_method {
    ($T:ty, $name:ident, in $Trait:path) => {{
        // Fails to compile when the trait declares no such member.
        #[allow(dead_code)]
        fn __declared<X: $Trait>() {
            let _ = <X as $Trait>::$name;
        }

        $crate::has_trait!($T, $Trait)
    }};
    ($T:ty, $name:ident) => {{
        #[allow(non_upper_case_globals, dead_code)]
        trait __Fallback {
            const $name: $crate::detect::Missing = $crate::detect::Missing;
        }
        impl<T: ?Sized> __Fallback for T {}

        trait __ViaMissing {
            fn __detected(&self) -> bool {
                false
            }
        }
        impl __ViaMissing for $crate::detect::Missing {}

        trait __ViaMember {
            fn __detected(&self) -> bool {
                true
            }
        }
        impl<X> __ViaMember for &X {}

        (&<$T>::$name).__detected()
    }};
}
