//! Per-severity logging macros.
//!
//! Each macro takes a [`Logger`][crate::Logger], a format template and
//! positional arguments, and captures the call site via
//! [`crate::caller!`]. The `*_x!` variants additionally take an
//! explicit request id as the first argument after the logger, overriding the
//! logger's own id for that one line.

/// Logs a message at TRACE level.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(
            $crate::Level::Trace,
            $crate::caller!(),
            ::core::option::Option::None,
            ::core::format_args!($($arg)+),
        )
    };
}

/// Logs a message at DEBUG level.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(
            $crate::Level::Debug,
            $crate::caller!(),
            ::core::option::Option::None,
            ::core::format_args!($($arg)+),
        )
    };
}

/// Logs a message at INFO level.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(
            $crate::Level::Info,
            $crate::caller!(),
            ::core::option::Option::None,
            ::core::format_args!($($arg)+),
        )
    };
}

/// Logs a message at WARN level.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(
            $crate::Level::Warn,
            $crate::caller!(),
            ::core::option::Option::None,
            ::core::format_args!($($arg)+),
        )
    };
}

/// Logs a message at ERROR level.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(
            $crate::Level::Error,
            $crate::caller!(),
            ::core::option::Option::None,
            ::core::format_args!($($arg)+),
        )
    };
}

/// Logs a message at PANIC level, unconditionally, and returns a
/// [`FatalLog`][crate::FatalLog] sentinel.
///
/// The record is emitted regardless of the configured minimum level. The
/// caller decides whether to terminate via
/// [`FatalLog::exit`][crate::FatalLog::exit].
#[macro_export]
macro_rules! panic {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panic_log(
            $crate::caller!(),
            ::core::option::Option::None,
            ::core::format_args!($($arg)+),
        )
    };
}

/// Logs a message at TRACE level with an explicit request id.
#[macro_export]
macro_rules! trace_x {
    ($logger:expr, $id:expr, $($arg:tt)+) => {
        $logger.log(
            $crate::Level::Trace,
            $crate::caller!(),
            ::core::option::Option::Some(::core::convert::AsRef::<str>::as_ref(&$id)),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Logs a message at DEBUG level with an explicit request id.
#[macro_export]
macro_rules! debug_x {
    ($logger:expr, $id:expr, $($arg:tt)+) => {
        $logger.log(
            $crate::Level::Debug,
            $crate::caller!(),
            ::core::option::Option::Some(::core::convert::AsRef::<str>::as_ref(&$id)),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Logs a message at INFO level with an explicit request id.
#[macro_export]
macro_rules! info_x {
    ($logger:expr, $id:expr, $($arg:tt)+) => {
        $logger.log(
            $crate::Level::Info,
            $crate::caller!(),
            ::core::option::Option::Some(::core::convert::AsRef::<str>::as_ref(&$id)),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Logs a message at WARN level with an explicit request id.
#[macro_export]
macro_rules! warn_x {
    ($logger:expr, $id:expr, $($arg:tt)+) => {
        $logger.log(
            $crate::Level::Warn,
            $crate::caller!(),
            ::core::option::Option::Some(::core::convert::AsRef::<str>::as_ref(&$id)),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Logs a message at ERROR level with an explicit request id.
#[macro_export]
macro_rules! error_x {
    ($logger:expr, $id:expr, $($arg:tt)+) => {
        $logger.log(
            $crate::Level::Error,
            $crate::caller!(),
            ::core::option::Option::Some(::core::convert::AsRef::<str>::as_ref(&$id)),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Logs a message at PANIC level with an explicit request id, returning a
/// [`FatalLog`][crate::FatalLog] sentinel.
#[macro_export]
macro_rules! panic_x {
    ($logger:expr, $id:expr, $($arg:tt)+) => {
        $logger.panic_log(
            $crate::caller!(),
            ::core::option::Option::Some(::core::convert::AsRef::<str>::as_ref(&$id)),
            ::core::format_args!($($arg)+),
        )
    };
}
