//! Primary category predicates: every type is in exactly one.

mod common;

use type_trait::prelude::*;

#[derive(Introspect)]
#[allow(dead_code)]
struct Point {
    _x: i32,
    _y: i32,
}

#[derive(Introspect)]
#[allow(dead_code)]
enum Direction {
    North,
    South,
}

#[derive(Introspect)]
#[allow(dead_code)]
enum Message {
    Quit,
    Move { x: i32, y: i32 },
}

#[derive(Introspect)]
#[allow(dead_code)]
union Bits {
    _int: u32,
    _float: f32,
}

fn primary_row<T: ?Sized + Introspect>() -> [bool; 14] {
    [
        is_void::<T>(),
        is_null_pointer::<T>(),
        is_integral::<T>(),
        is_floating_point::<T>(),
        is_array::<T>(),
        is_enum::<T>(),
        is_union::<T>(),
        is_class::<T>(),
        is_function::<T>(),
        is_pointer::<T>(),
        is_lvalue_reference::<T>(),
        is_rvalue_reference::<T>(),
        is_member_object_pointer::<T>(),
        is_member_function_pointer::<T>(),
    ]
}

macro_rules! exactly_one {
    ($($t:ty),* $(,)?) => {
        $(
            let row = primary_row::<$t>();
            assert_eq!(row.iter().filter(|b| **b).count(), 1, "{}: {:?}", stringify!($t), row);
        )*
    };
}

#[test]
fn test_exactly_one_category() {
    common::scenario("primary::exactly_one");
    exactly_one!(
        (),
        NullPtr,
        bool,
        char,
        i8,
        u128,
        isize,
        f32,
        f64,
        [i32; 4],
        [i32; 0],
        [i32],
        Direction,
        Bits,
        Point,
        Message,
        (u8, u8),
        fn(),
        unsafe extern "C" fn(i32, ...) -> i32,
        *const u8,
        *mut [u8],
        &'static u8,
        &'static mut u8,
        RvalueRef<u8>,
        MemberPtr<i32, Point>,
        MemberPtr<fn(i32), Point>,
        Const<i32>,
        ConstVolatile<Point>,
        Option<u8>,
        core::cmp::Ordering,
    );
}

#[test]
fn test_integral_set() {
    common::scenario("primary::integral");
    assert!(is_integral::<bool>());
    assert!(is_integral::<char>());
    assert!(is_integral::<i8>() && is_integral::<i16>() && is_integral::<i32>());
    assert!(is_integral::<i64>() && is_integral::<i128>() && is_integral::<isize>());
    assert!(is_integral::<u8>() && is_integral::<u16>() && is_integral::<u32>());
    assert!(is_integral::<u64>() && is_integral::<u128>() && is_integral::<usize>());
    assert!(is_integral::<core::ffi::c_int>());
    assert!(!is_integral::<f64>());
    assert!(!is_integral::<*const i32>());
    assert!(!is_integral::<Direction>());
}

#[test]
fn test_scalar_builtins_integral_xor_floating() {
    common::scenario("primary::integral_xor_floating");
    macro_rules! xor {
        ($($t:ty),*) => {
            $(assert!(is_integral::<$t>() != is_floating_point::<$t>(), stringify!($t));)*
        };
    }
    xor!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
}

#[test]
fn test_qualifiers_are_transparent() {
    common::scenario("primary::qualifiers");
    assert!(is_integral::<Const<i32>>());
    assert!(is_floating_point::<Volatile<f32>>());
    assert!(is_void::<ConstVolatile<()>>());
    assert!(is_pointer::<Const<*mut u8>>());
    assert!(is_class::<Const<Point>>());
}

#[test]
fn test_class_union_enum_are_exclusive() {
    common::scenario("primary::class_union_enum");
    assert!(is_union::<Bits>());
    assert!(!is_class::<Bits>());
    assert!(is_class::<Point>());
    assert!(!is_union::<Point>());
    assert!(is_enum::<Direction>());
    assert!(!is_class::<Direction>());
    assert!(is_class::<Message>());
    assert!(!is_enum::<Message>());
    assert!(is_union::<core::mem::MaybeUninit<u8>>());
}

#[test]
fn test_functions_and_pointers() {
    common::scenario("primary::functions");
    assert!(is_function::<fn()>());
    assert!(is_function::<fn(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, bool, char) -> u8>());
    assert!(is_function::<unsafe fn(&'static u8) -> *const u8>());
    assert!(is_function::<extern "C" fn(i32) -> i32>());
    assert!(!is_pointer::<fn()>());
    assert!(is_pointer::<*const fn()>());
    assert!(!is_function::<*const fn()>());
}

#[test]
fn test_member_pointers_split_on_function() {
    common::scenario("primary::member_pointers");
    assert!(is_member_object_pointer::<MemberPtr<i32, Point>>());
    assert!(!is_member_function_pointer::<MemberPtr<i32, Point>>());
    assert!(is_member_function_pointer::<MemberPtr<fn(i32) -> i32, Point>>());
    assert!(!is_member_object_pointer::<MemberPtr<fn(i32) -> i32, Point>>());
    assert!(!is_pointer::<MemberPtr<i32, Point>>());
}

#[test]
fn test_references() {
    common::scenario("primary::references");
    assert!(is_lvalue_reference::<&'static i32>());
    assert!(is_lvalue_reference::<&'static mut i32>());
    assert!(!is_rvalue_reference::<&'static i32>());
    assert!(is_rvalue_reference::<RvalueRef<i32>>());
    assert!(!is_lvalue_reference::<RvalueRef<i32>>());
    assert!(!is_lvalue_reference::<*const i32>());
}
