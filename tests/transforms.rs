//! Reference, pointer and extent transforms, selection and gating.

mod common;

use type_trait::prelude::*;

#[derive(Introspect)]
#[allow(dead_code)]
struct Frame(u32);

mod references {
    use super::*;

    #[test]
    fn test_remove_reference() {
        common::scenario("transform::remove_reference");
        assert!(is_same::<RemoveReference<&'static i32>, i32>());
        assert!(is_same::<RemoveReference<&'static mut i32>, i32>());
        assert!(is_same::<RemoveReference<RvalueRef<i32>>, i32>());
        assert!(is_same::<RemoveReference<i32>, i32>());
        assert!(is_same::<RemoveReference<&'static Const<i32>>, Const<i32>>());
    }

    #[test]
    fn test_add_reference_collapses() {
        common::scenario("transform::add_reference");
        assert!(is_same::<AddLvalueReference<i32>, &'static i32>());
        assert!(is_same::<AddLvalueReference<&'static i32>, &'static i32>());
        assert!(is_same::<AddLvalueReference<RvalueRef<i32>>, &'static i32>());
        assert!(is_same::<AddRvalueReference<i32>, RvalueRef<i32>>());
        assert!(is_same::<AddRvalueReference<&'static i32>, &'static i32>());
        assert!(is_same::<AddRvalueReference<RvalueRef<i32>>, RvalueRef<i32>>());
        assert!(is_same::<AddLvalueReference<()>, ()>());
        assert!(is_same::<AddLvalueReference<Const<()>>, Const<()>>());
    }

    #[test]
    fn test_remove_cvref() {
        common::scenario("transform::remove_cvref");
        assert!(is_same::<RemoveCvref<&'static ConstVolatile<Frame>>, Frame>());
        assert!(is_same::<RemoveCvref<Const<Frame>>, Frame>());
    }
}

mod pointers {
    use super::*;

    #[test]
    fn test_remove_pointer_one_layer() {
        common::scenario("transform::remove_pointer");
        assert!(is_same::<RemovePointer<*mut i32>, i32>());
        assert!(is_same::<RemovePointer<*const Const<i32>>, Const<i32>>());
        assert!(is_same::<RemovePointer<*mut *mut i32>, *mut i32>());
        assert!(is_same::<RemovePointer<i32>, i32>());
        assert!(is_same::<RemovePointer<fn()>, fn()>());
    }

    #[test]
    fn test_remove_pointer_through_qualifiers() {
        common::scenario("transform::remove_qualified_pointer");
        assert!(is_same::<RemovePointer<Const<*mut f64>>, f64>());
        assert!(is_same::<RemovePointer<Volatile<*mut f64>>, f64>());
        assert!(is_same::<RemovePointer<ConstVolatile<*const f64>>, f64>());
        assert!(is_same::<RemovePointer<Const<f64>>, Const<f64>>());
    }

    #[test]
    fn test_add_pointer() {
        common::scenario("transform::add_pointer");
        assert!(is_same::<AddPointer<i32>, *mut i32>());
        assert!(is_same::<AddPointer<&'static i32>, *mut i32>());
        assert!(is_same::<AddPointer<[u8]>, *mut [u8]>());
        assert!(is_same::<RemovePointer<AddPointer<Frame>>, Frame>());
    }
}

mod extents {
    use super::*;

    #[test]
    fn test_remove_extent() {
        common::scenario("transform::remove_extent");
        assert!(is_same::<RemoveExtent<[i32; 3]>, i32>());
        assert!(is_same::<RemoveExtent<[[i32; 4]; 3]>, [i32; 4]>());
        assert!(is_same::<RemoveExtent<[i32]>, i32>());
        assert!(is_same::<RemoveExtent<i32>, i32>());
        assert!(is_same::<RemoveExtent<Const<[i32; 3]>>, Const<i32>>());
    }

    #[test]
    fn test_remove_all_extents_reaches_fixed_point() {
        common::scenario("transform::remove_all_extents");
        assert!(is_same::<RemoveAllExtents<[[i32; 4]; 3]>, i32>());
        assert!(is_same::<RemoveAllExtents<[[[Frame; 1]; 2]]>, Frame>());
        assert!(is_same::<RemoveAllExtents<i32>, i32>());
        assert!(is_same::<RemoveAllExtents<RemoveAllExtents<[[i32; 4]; 3]>>, RemoveAllExtents<[[i32; 4]; 3]>>());
        assert!(is_same::<RemoveAllExtents<Volatile<[[u8; 2]; 2]>>, Volatile<u8>>());
    }

    #[test]
    fn test_descriptor_walk_agrees() {
        common::scenario("transform::remove_all_extents_desc");
        let desc = common::describe::<[[i32; 4]; 3]>();
        assert_eq!(desc.remove_all_extents(), common::describe::<RemoveAllExtents<[[i32; 4]; 3]>>());
    }
}

mod selection {
    use super::*;

    #[test]
    fn test_conditional() {
        common::scenario("transform::conditional");
        assert!(is_same::<Conditional<true, i32, Frame>, i32>());
        assert!(is_same::<Conditional<false, i32, Frame>, Frame>());
        assert!(is_same::<Conditional<{ is_signed::<i8>() }, u8, i8>, u8>());
        assert!(is_same::<ConditionalT<IsPointer<*const u8>, [u8; 1], ()>, [u8; 1]>());
    }

    #[test]
    fn test_decay() {
        common::scenario("transform::decay");
        assert!(is_same::<Decay<[i32; 3]>, *mut i32>());
        assert!(is_same::<Decay<&'static [i32; 3]>, *mut i32>());
        assert!(is_same::<Decay<Const<[i32; 3]>>, *mut Const<i32>>());
        assert!(is_same::<Decay<&'static Const<i32>>, i32>());
        assert!(is_same::<Decay<RvalueRef<Frame>>, Frame>());
        assert!(is_same::<Decay<fn(u8) -> u8>, *mut fn(u8) -> u8>());
        assert!(is_same::<Decay<u8>, u8>());
    }
}

mod gating {
    use super::*;

    trait Halve {
        fn halve(self) -> Self;
    }

    // Only integral types qualify; others are excluded, not rejected.
    impl<T> Halve for T
    where
        T: Introspect + core::ops::Shr<u32, Output = T>,
        IsIntegral<T>: EnableIf,
    {
        fn halve(self) -> Self {
            self >> 1
        }
    }

    fn narrow<T: Introspect>(value: T) -> EnableIfT<IsIntegral<T>, T>
    where
        IsIntegral<T>: EnableIf<T, Type = T>,
    {
        value
    }

    #[test]
    fn test_enable_if_names_type_when_true() {
        common::scenario("transform::enable_if");
        assert!(is_same::<EnableIfC<true, i32>, i32>());
        assert!(is_same::<EnableIfC<true>, ()>());
        assert!(is_same::<EnableIfT<IsIntegral<u8>, Frame>, Frame>());
        assert_eq!(narrow(7u16), 7);
    }

    #[test]
    fn test_enable_if_excludes_impl() {
        common::scenario("transform::enable_if_excludes");
        assert_eq!(10u32.halve(), 5);
        assert!(has_trait!(u64, Halve));
        assert!(!has_trait!(f64, Halve));
        assert!(!has_trait!(Frame, Halve));
    }
}
