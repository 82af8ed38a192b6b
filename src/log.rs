//! Conditional logging macros.
//!
//! With the `tracing` feature these re-export `tracing` macros; without it
//! they expand to nothing, so the adjuster and geometry code stay free of
//! logging cost in the default build.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __lensdraw_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __lensdraw_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{__lensdraw_debug as debug, __lensdraw_warn as warn};
