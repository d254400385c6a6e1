//! # Layer 0: Primitives
//!
//! Basic building blocks for every query:
//! - `constant.rs`: Value-carrying constant wrappers (`BoolConstant`, `I32Constant`, ...).
//! - `bool.rs`: Type-level boolean logic over `TrueType`/`FalseType`.
//! - `const_utils.rs`: Helpers usable in const evaluation.

pub mod bool;
pub mod const_utils;
pub mod constant;

// Re-export key types at this level
pub use bool::{And, Bool, Conditional, ConditionalT, Not, Or};
pub use constant::{
    BoolConstant, CharConstant, FalseType, I8Constant, I16Constant, I32Constant, I64Constant,
    I128Constant, IntegralConstant, IsizeConstant, TrueType, U8Constant, U16Constant, U32Constant,
    U64Constant, U128Constant, UsizeConstant,
};
