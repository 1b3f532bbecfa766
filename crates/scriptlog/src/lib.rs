//! `scriptlog` provides leveled logging for services and scripts, with a
//! console sink and an optional append-only file sink.
//!
//! It offers:
//! - A [`Logger`] constructed once from an explicit [`LoggerConfig`] and
//!   shared with the rest of the program.
//! - Per-severity macros ([`trace!`], [`debug!`], [`info!`], [`warn!`],
//!   [`error!`], [`panic!`]) taking a format template and positional
//!   arguments, plus `*_x!` variants accepting a per-call request id.
//! - Human-readable development output (optionally colorized per severity)
//!   or single-line JSON production output, selected by [`Environment`].
//! - Call-site capture of file, function and line on every record.
//! - A sticky file sink: on the first directory or open failure, file output
//!   is disabled for the remainder of the process and logging continues on
//!   stdout alone.
//!
//! Log operations never return errors to the caller. The one deliberate
//! stop-the-world path, PANIC, emits its record and returns a [`FatalLog`]
//! sentinel; the embedding program decides whether to call
//! [`FatalLog::exit`].
//!
//! # Example
//!
//! ```
//! use scriptlog::{Environment, Level, Logger, LoggerConfig};
//!
//! let logger = Logger::new(LoggerConfig {
//!     app_name: "svc".to_owned(),
//!     version: "1.2.0".to_owned(),
//!     min_level: Level::Info,
//!     colors: false,
//!     environment: Environment::Dev,
//!     request_id: None,
//!     file_config: None,
//! });
//!
//! scriptlog::info!(logger, "starting up");
//! scriptlog::warn!(logger, "disk at {}%", 91);
//! scriptlog::debug!(logger, "filtered below the configured minimum");
//!
//! // Correlate the lines of one externally scoped operation.
//! scriptlog::info_x!(logger, "req-1234", "handling request");
//!
//! // PANIC is emitted unconditionally; the exit decision stays with the
//! // embedding program.
//! let fatal = scriptlog::panic!(logger, "unrecoverable: {}", "example");
//! // `fatal.exit()` would print a backtrace and terminate with code 1.
//! drop(fatal);
//! ```

mod caller;
mod level;
mod macros;
mod render;
pub mod request_id;
mod sink;

use std::{backtrace::Backtrace, fmt, path::PathBuf, process, str::FromStr};

use time::UtcDateTime;

#[doc(hidden)]
pub use self::caller::__function_path;
pub use self::{
    caller::Caller,
    level::{Level, ParseLevelError},
};
use self::{
    render::{
        formatter::{self, RenderError},
        record::Record,
    },
    sink::FileSink,
};

pub(crate) mod keys {
    pub(crate) const TIME: &str = "time";
    pub(crate) const LEVEL: &str = "level";
    pub(crate) const REQUEST_ID: &str = "request_id";
    pub(crate) const MSG: &str = "msg";
    pub(crate) const FILE: &str = "file";
    pub(crate) const FUNC: &str = "func";
    pub(crate) const LINE: &str = "line";
    pub(crate) const APP_NAME: &str = "app_name";
    pub(crate) const VERSION: &str = "version";
}

/// Directory used by [`FileSinkConfig::default`].
pub const DEFAULT_LOG_DIRECTORY: &str = "/var/log/scripts";

/// Output mode of the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Human-readable lines, optionally colorized.
    #[default]
    Dev,

    /// Single-line JSON records; colors always disabled.
    Prod,
}

/// Error returned when parsing an [`Environment`] from an unrecognized
/// string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized environment `{0}`, expected `dev` or `prod`")]
pub struct ParseEnvironmentError(String);

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            _ => Err(ParseEnvironmentError(s.to_owned())),
        }
    }
}

/// Configuration for the file sink.
#[derive(Debug, Clone)]
pub struct FileSinkConfig {
    /// Directory holding the log file. The file itself is named
    /// `<app_name>.log` and is only ever appended to.
    pub directory: PathBuf,
}

impl Default for FileSinkConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_LOG_DIRECTORY),
        }
    }
}

/// Configuration for constructing a [`Logger`].
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Application name, included in every record and used as the log file
    /// name. Defaults to the current executable's basename.
    pub app_name: String,

    /// Application version string included in every record.
    pub version: String,

    /// Minimum level a record must have to be emitted. PANIC records ignore
    /// this threshold.
    pub min_level: Level,

    /// Enables per-severity ANSI colors in development console output.
    /// Production output is never colorized.
    pub colors: bool,

    /// Selects human-readable (dev) or JSON (prod) rendering.
    pub environment: Environment,

    /// Fixed request id for all records. If `None`, an 8-character id is
    /// generated at construction.
    pub request_id: Option<String>,

    /// Configuration for the file sink. If `None`, file output is disabled
    /// and records go to stdout only.
    pub file_config: Option<FileSinkConfig>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            version: "0.0.0".to_owned(),
            min_level: Level::Trace,
            colors: true,
            environment: Environment::Dev,
            request_id: None,
            file_config: Some(FileSinkConfig::default()),
        }
    }
}

fn default_app_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "unknown".to_owned())
}

/// A leveled logger writing to stdout and, optionally, an append-only file.
///
/// Construct one with [`Logger::new`] and log through the per-severity
/// macros. All configuration is fixed at construction; there is no process
/// global state.
#[derive(Debug)]
pub struct Logger {
    app_name: String,
    version: String,
    min_level: Level,
    colors: bool,
    environment: Environment,
    request_id: String,
    file_sink: Option<FileSink>,
}

impl Logger {
    /// Creates a logger from the given configuration.
    ///
    /// The file sink, when configured, is initialized lazily: the first
    /// emitted record creates the directory and opens the file. A failure at
    /// that point disables file output permanently and logging continues on
    /// stdout.
    pub fn new(config: LoggerConfig) -> Self {
        let request_id = config.request_id.unwrap_or_else(request_id::generate);
        let file_sink = config
            .file_config
            .map(|file_config| FileSink::new(file_config.directory, &config.app_name));

        Self {
            app_name: config.app_name,
            version: config.version,
            min_level: config.min_level,
            colors: config.colors,
            environment: config.environment,
            request_id,
            file_sink,
        }
    }

    /// The request id attached to records that don't carry an explicit one.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// The configured minimum level.
    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Logs one record.
    ///
    /// This is the entry point the per-severity macros expand to. Wrapping
    /// code that wants to report its own caller rather than the wrapper
    /// frame can invoke it directly with an explicit [`Caller`], or with
    /// [`Caller::unknown`] when no location is available.
    ///
    /// The record is dropped without output when `level` is below the
    /// configured minimum; [`Level::Panic`] is never filtered. Rendering or
    /// sink failures are reported on stdout and never propagate.
    pub fn log(
        &self,
        level: Level,
        caller: Caller,
        request_id: Option<&str>,
        args: fmt::Arguments<'_>,
    ) {
        if !self.enabled(level) {
            return;
        }
        self.emit(level, &caller, request_id, args);
    }

    /// Logs one PANIC record unconditionally and returns a [`FatalLog`].
    ///
    /// The sentinel carries a backtrace captured at this call;
    /// [`FatalLog::exit`] prints it and terminates the process with exit
    /// code 1. The library itself never exits.
    pub fn panic_log(
        &self,
        caller: Caller,
        request_id: Option<&str>,
        args: fmt::Arguments<'_>,
    ) -> FatalLog {
        self.emit(Level::Panic, &caller, request_id, args);
        FatalLog::capture()
    }

    fn enabled(&self, level: Level) -> bool {
        level == Level::Panic || level >= self.min_level
    }

    fn emit(
        &self,
        level: Level,
        caller: &Caller,
        request_id: Option<&str>,
        args: fmt::Arguments<'_>,
    ) {
        if caller.is_unknown() {
            caller_diagnostic();
        }

        let record = Record {
            time: UtcDateTime::now(),
            level,
            request_id: request_id.unwrap_or(&self.request_id),
            message: args.to_string(),
            caller,
            app_name: &self.app_name,
            version: &self.version,
        };

        match formatter::render_console(&record, self.environment, self.colors) {
            Ok(line) => sink::write_stdout(&line),
            Err(err) => render_diagnostic(&err),
        }

        if let Some(file_sink) = &self.file_sink {
            match formatter::render_file(&record, self.environment) {
                Ok(line) => file_sink.write_line(&line),
                Err(err) => render_diagnostic(&err),
            }
        }
    }
}

#[allow(clippy::print_stdout)]
fn caller_diagnostic() {
    println!(
        "[WARN] {}: could not resolve caller metadata, using placeholder values",
        env!("CARGO_PKG_NAME")
    );
}

#[allow(clippy::print_stdout)]
fn render_diagnostic(err: &RenderError) {
    println!(
        "[WARN] {}: failed to render log record, dropping the line: {err}",
        env!("CARGO_PKG_NAME")
    );
}

/// Sentinel returned by PANIC-level operations.
///
/// The PANIC record has already been written when a `FatalLog` exists. The
/// embedding program chooses what happens next: call [`FatalLog::exit`] to
/// print the captured backtrace and terminate with exit code 1, or drop the
/// sentinel to continue (useful in tests).
#[derive(Debug)]
#[must_use = "the PANIC record was emitted; call `exit()` to terminate the process"]
pub struct FatalLog {
    backtrace: Backtrace,
}

impl FatalLog {
    fn capture() -> Self {
        Self {
            backtrace: Backtrace::force_capture(),
        }
    }

    /// The backtrace captured at the PANIC call site.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// Prints the captured backtrace to stdout and terminates the process
    /// with exit code 1.
    #[allow(clippy::print_stdout)]
    pub fn exit(self) -> ! {
        println!("{}", self.backtrace);
        process::exit(1)
    }
}
