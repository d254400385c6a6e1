// Macros used only inside the type-trait crate itself

pub mod fn_types;
pub mod std_types;
