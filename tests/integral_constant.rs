//! Constant wrappers: values carried by types.

mod common;

use type_trait::prelude::*;
use type_trait::{BoolConstant, CharConstant, I32Constant, I64Constant, U8Constant, UsizeConstant};

// Arithmetic on carried values happens at compile time.
const _: () = assert!(I32Constant::<2>::VALUE * 2 == I32Constant::<4>::VALUE);

#[test]
fn test_value_doubling() {
    common::scenario("integral_constant::doubling");
    assert_eq!(<I32Constant<2> as IntegralConstant>::VALUE * 2, <I32Constant<4> as IntegralConstant>::VALUE);
}

#[test]
fn test_same_value_same_type() {
    common::scenario("integral_constant::identity");
    fn same_type<A: 'static, B: 'static>() -> bool {
        core::any::TypeId::of::<A>() == core::any::TypeId::of::<B>()
    }
    assert!(same_type::<I64Constant<5>, I64Constant<5>>());
    assert!(!same_type::<I64Constant<5>, I64Constant<6>>());
    assert!(same_type::<TrueType, BoolConstant<true>>());
    assert!(same_type::<<UsizeConstant<3> as IntegralConstant>::Type, UsizeConstant<3>>());
}

#[test]
fn test_conversion_operator() {
    common::scenario("integral_constant::conversion");
    let v: i32 = I32Constant::<-9>.into();
    assert_eq!(v, -9);
    assert_eq!(U8Constant::<255>.value(), 255u8);
    assert_eq!(char::from(CharConstant::<'z'>), 'z');
    assert!(bool::from(TrueType::default()));
    assert!(!FalseType::default().value());
}

#[test]
fn test_predicate_results_are_bool_constants() {
    common::scenario("integral_constant::predicate_results");
    fn is_true<B: Bool>() -> bool {
        B::VALUE
    }
    assert!(is_true::<IsIntegral<u16>>());
    assert!(!is_true::<IsIntegral<f32>>());
    assert!(!is_true::<<IsIntegral<u16> as Bool>::Not>());
}
