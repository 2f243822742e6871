//! Logging shims.
//!
//! With the `tracing` feature, `debug!` and `warn!` are the `tracing` macros.
//! Without it they swallow their arguments, so rendering has no side effects.
//! Call them as `crate::log::debug!`.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! discard {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {discard as debug, discard as warn};
