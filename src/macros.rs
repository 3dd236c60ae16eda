//! Logging shims over `tracing`.
//!
//! The `tracing` dependency is optional. These macros forward to it when the
//! `tracing` feature is enabled and expand to nothing otherwise, so call sites
//! never need their own `#[cfg]`.

/// Emits a `TRACE` event for a successful mutation.
macro_rules! graph_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

/// Emits a `DEBUG` event for a rejected or ignored operation.
macro_rules! graph_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    };
}
