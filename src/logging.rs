//! Unified logging macros for knx-tp1.
//!
//! This module provides a unified logging interface that automatically
//! selects between `log::` and `defmt::` based on the active feature
//! flags, and compiles to nothing when neither backend is enabled.
//!
//! # Usage
//!
//! ```rust,ignore
//! knx_log!(warn, "checksum mismatch: got {}, expected {}", got, want);
//! knx_log!(trace, "telegram built, {} bytes", len);
//! ```
//!
//! # Feature Flags
//!
//! - `log` - Uses the `log::` crate (host-side applications)
//! - `defmt` - Uses `defmt::` (more efficient for embedded targets)
//! - Neither - All logging statements compile out

/// Unified logging macro - selects log:: or defmt:: based on features
#[macro_export]
#[cfg(feature = "log")]
macro_rules! knx_log {
    (info, $($arg:tt)*) => { log::info!($($arg)*) };
    (debug, $($arg:tt)*) => { log::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { log::warn!($($arg)*) };
    (error, $($arg:tt)*) => { log::error!($($arg)*) };
    (trace, $($arg:tt)*) => { log::trace!($($arg)*) };
}

#[macro_export]
#[cfg(all(feature = "defmt", not(feature = "log")))]
macro_rules! knx_log {
    (info, $($arg:tt)*) => { defmt::info!($($arg)*) };
    (debug, $($arg:tt)*) => { defmt::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { defmt::warn!($($arg)*) };
    (error, $($arg:tt)*) => { defmt::error!($($arg)*) };
    (trace, $($arg:tt)*) => { defmt::trace!($($arg)*) };
}

#[macro_export]
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! knx_log {
    ($level:ident, $($arg:tt)*) => {{}};
}
