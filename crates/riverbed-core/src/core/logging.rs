//! Logging macros
//!
//! Thin wrappers over `tracing` that pin every event to the crate's log
//! target, so subscribers can filter builder chatter with
//! `RUST_LOG=riverbed=trace` independent of the embedding application.

/// Warning level logging - potentially problematic situations
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: $crate::constants::LOG_TARGET, $($arg)*)
    };
}

/// Debug level logging - detailed information for debugging
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: $crate::constants::LOG_TARGET, $($arg)*)
    };
}

/// Trace level logging - per-delta and per-merge detail
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        $crate::tracing::trace!(target: $crate::constants::LOG_TARGET, $($arg)*)
    };
}
