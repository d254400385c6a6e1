//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Introspect)]` | on struct/union/enum | Category, descriptor and bases |

pub mod introspect;
