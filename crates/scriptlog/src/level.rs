//! Log severity levels and their ordering.

use std::{fmt, str::FromStr};

use serde::Serialize;

/// Severity of a log record.
///
/// Levels are totally ordered from [`Level::Trace`] (most verbose) up to
/// [`Level::Panic`]. A record is emitted when its level is at least the
/// logger's configured minimum; [`Level::Panic`] is never filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    /// Fine-grained diagnostic output.
    Trace,

    /// Information useful while developing or debugging.
    Debug,

    /// Routine operational messages.
    Info,

    /// Something unexpected that the program can recover from.
    Warn,

    /// A failure of the current operation.
    Error,

    /// An unrecoverable failure. Emitted unconditionally.
    Panic,
}

impl Level {
    /// The level's tag as it appears in rendered output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Panic => "PANIC",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from an unrecognized string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized log level `{0}`, expected one of trace/debug/info/warn/warning/error/panic")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            // Both spellings are accepted in configuration.
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "panic" => Ok(Self::Panic),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}
