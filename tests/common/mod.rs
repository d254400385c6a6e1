//! Shared harness for the integration tests.
//!
//! `scenario` is the logging hook each test calls first. Output is off
//! unless `TYPE_TRAIT_LOG` is set, e.g. `TYPE_TRAIT_LOG=debug`.

#![allow(dead_code)]

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use type_trait::{Introspect, TypeDesc};

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TYPE_TRAIT_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Mark the start of a test scenario.
pub fn scenario(name: &str) {
    init_logging();
    tracing::info!(scenario = name, "begin");
}

/// Descriptor of `T`, logged at debug level.
pub fn describe<T: ?Sized + Introspect>() -> &'static TypeDesc {
    let desc = T::DESC;
    tracing::debug!(ty = %desc, "describe");
    desc
}
