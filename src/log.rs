//! Conditional logging macros.
//!
//! With the `tracing` feature these are the `tracing` macros themselves.
//! Without it they expand to nothing, so geometry code can log freely.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __blockgeom_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __blockgeom_trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __blockgeom_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{
    __blockgeom_debug as debug, __blockgeom_trace as trace, __blockgeom_warn as warn,
};
