//! Compile-time constant wrappers.
//!
//! A wrapper is a zero-sized type whose identity *is* its value:
//! `I32Constant<2>` and `I32Constant<2>` are the same type, so constants can
//! be compared, selected and carried through trait resolution like any other
//! type.

/// A type standing for one compile-time value.
pub trait IntegralConstant: Copy + Default + 'static {
    /// The type of [`VALUE`](Self::VALUE).
    type ValueType: Copy;

    /// The carried value.
    const VALUE: Self::ValueType;

    /// Self alias, so that every wrapper also reads as a type function
    /// returning itself.
    type Type: IntegralConstant<ValueType = Self::ValueType>;

    /// Read the value from an instance.
    #[inline(always)]
    fn value(&self) -> Self::ValueType {
        Self::VALUE
    }
}

macro_rules! define_constants {
    ($($(#[$doc:meta])* $name:ident => $t:ty),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name<const V: $t>;

            impl<const V: $t> IntegralConstant for $name<V> {
                type ValueType = $t;
                const VALUE: $t = V;
                type Type = Self;
            }

            impl<const V: $t> From<$name<V>> for $t {
                #[inline(always)]
                fn from(_: $name<V>) -> $t {
                    V
                }
            }
        )*
    };
}

define_constants! {
    /// A `bool` constant. Every predicate result is one of these.
    BoolConstant => bool,
    CharConstant => char,
    I8Constant => i8,
    I16Constant => i16,
    I32Constant => i32,
    I64Constant => i64,
    I128Constant => i128,
    IsizeConstant => isize,
    U8Constant => u8,
    U16Constant => u16,
    U32Constant => u32,
    U64Constant => u64,
    U128Constant => u128,
    /// A `usize` constant, the result type of `Rank` and `Extent`.
    UsizeConstant => usize,
}

/// The true predicate result.
pub type TrueType = BoolConstant<true>;

/// The false predicate result.
pub type FalseType = BoolConstant<false>;
