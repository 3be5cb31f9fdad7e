//! Internal logging utilities for consistent log formatting across the library
//!
//! This module provides macros that adapt log messages based on feature flags:
//! - `tracing`: Enable/disable all logging (enabled by default)
//! - `plain-logs`: When enabled with `tracing`, uses plain text prefixes instead of emojis
//!
//! ## Usage
//!
//! ```toml
//! # Default: tracing enabled with emojis
//! dioxus-async-content = "0.1"
//!
//! # Disable all logging
//! dioxus-async-content = { version = "0.1", default-features = false }
//!
//! # Enable tracing with plain text (no emojis)
//! dioxus-async-content = { version = "0.1", features = ["plain-logs"] }
//! ```
//!
//! Fetch errors are opaque to this crate, so none of these macros are ever
//! handed an error value. Only state tags and generations are logged.

/// Internal debug logging macro that respects the tracing feature flag
#[macro_export]
#[doc(hidden)]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

/// Internal warning macro that respects the tracing feature flag
#[macro_export]
#[doc(hidden)]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)*);
    };
}

/// Logs the start of a fetch with appropriate formatting
#[macro_export]
#[doc(hidden)]
macro_rules! log_fetch_start {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "tracing", not(feature = "plain-logs")))]
        tracing::debug!("🚀 [FETCH] {}", format!($($arg)*));
        #[cfg(all(feature = "tracing", feature = "plain-logs"))]
        tracing::debug!("[FETCH] {}", format!($($arg)*));
    };
}

/// Logs a fetch outcome being applied with appropriate formatting
#[macro_export]
#[doc(hidden)]
macro_rules! log_fetch_complete {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "tracing", not(feature = "plain-logs")))]
        tracing::debug!("✅ [FETCH] {}", format!($($arg)*));
        #[cfg(all(feature = "tracing", feature = "plain-logs"))]
        tracing::debug!("[FETCH-COMPLETE] {}", format!($($arg)*));
    };
}

/// Logs a superseded fetch result being dropped with appropriate formatting
#[macro_export]
#[doc(hidden)]
macro_rules! log_fetch_stale {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "tracing", not(feature = "plain-logs")))]
        tracing::debug!("🗑️ [STALE] {}", format!($($arg)*));
        #[cfg(all(feature = "tracing", feature = "plain-logs"))]
        tracing::debug!("[STALE] {}", format!($($arg)*));
    };
}

/// Logs a retry request with appropriate formatting
#[macro_export]
#[doc(hidden)]
macro_rules! log_retry {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "tracing", not(feature = "plain-logs")))]
        tracing::debug!("🔄 [RETRY] {}", format!($($arg)*));
        #[cfg(all(feature = "tracing", feature = "plain-logs"))]
        tracing::debug!("[RETRY] {}", format!($($arg)*));
    };
}

/// Logs a view swap with appropriate formatting
#[macro_export]
#[doc(hidden)]
macro_rules! log_swap {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "tracing", not(feature = "plain-logs")))]
        tracing::trace!("🎬 [SWAP] {}", format!($($arg)*));
        #[cfg(all(feature = "tracing", feature = "plain-logs"))]
        tracing::trace!("[SWAP] {}", format!($($arg)*));
    };
}
