//! Renders records into console and file lines.
//!
//! Three textual forms exist:
//! - development console: human-readable, severity-colored when enabled;
//! - development file: the same fields with colors stripped and every value
//!   quoted;
//! - production (console and file): a single-line JSON object.

use colored::{ColoredString, Colorize};
use time::{
    format_description::{BorrowedFormatItem, well_known::Iso8601},
    macros::format_description,
};

use super::record::{JsonRecord, Record};
use crate::{Environment, Level, keys};

/// Timestamp layout for development-mode text output.
const DEV_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Errors that can occur while rendering a record.
///
/// These never reach the caller of a log operation; the emit path prints a
/// diagnostic and drops the affected line.
#[derive(Debug, thiserror::Error)]
pub(crate) enum RenderError {
    /// JSON serialization of the record failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Formatting the record timestamp failed.
    #[error("timestamp formatting error: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// Renders the line written to standard output.
pub(crate) fn render_console(
    record: &Record<'_>,
    environment: Environment,
    colors: bool,
) -> Result<String, RenderError> {
    match environment {
        Environment::Prod => render_json(record),
        Environment::Dev => render_dev_console(record, colors),
    }
}

/// Renders the line written to the log file.
pub(crate) fn render_file(
    record: &Record<'_>,
    environment: Environment,
) -> Result<String, RenderError> {
    match environment {
        Environment::Prod => render_json(record),
        Environment::Dev => render_dev_file(record),
    }
}

fn render_json(record: &Record<'_>) -> Result<String, RenderError> {
    let json = JsonRecord {
        time: record.time.format(&Iso8601::DEFAULT)?,
        level: record.level,
        request_id: record.request_id,
        msg: &record.message,
        file: record.caller.file(),
        func: record.caller.function(),
        line: record.caller.line(),
        app_name: record.app_name,
        version: record.version,
    };
    Ok(serde_json::to_string(&json)?)
}

fn render_dev_console(record: &Record<'_>, colors: bool) -> Result<String, RenderError> {
    let time = record.time.format(DEV_TIME_FORMAT)?;
    let tag = format!("{:<5}", record.level);

    let line = if colors {
        // The configuration flag is authoritative: `colored` would otherwise
        // skip styling whenever stdout is not a tty, and redirected output is
        // the common case for scripts.
        colored::control::set_override(true);
        format!(
            "{time} {} [{}] {} {}:{}:{} {} {}",
            paint(record.level, &tag),
            record.request_id,
            paint(record.level, &record.message),
            record.caller.file(),
            record.caller.function(),
            record.caller.line(),
            record.app_name,
            record.version,
        )
    } else {
        format!(
            "{time} {tag} [{}] {} {}:{}:{} {} {}",
            record.request_id,
            record.message,
            record.caller.file(),
            record.caller.function(),
            record.caller.line(),
            record.app_name,
            record.version,
        )
    };

    Ok(line)
}

fn render_dev_file(record: &Record<'_>) -> Result<String, RenderError> {
    let time = record.time.format(DEV_TIME_FORMAT)?;

    // Values are always quoted so lines stay unambiguous when grepped.
    Ok(format!(
        "{}=\"{time}\" {}=\"{}\" {}={:?} {}={:?} {}={:?} {}={:?} {}=\"{}\" {}={:?} {}={:?}",
        keys::TIME,
        keys::LEVEL,
        record.level,
        keys::REQUEST_ID,
        record.request_id,
        keys::MSG,
        record.message,
        keys::FILE,
        record.caller.file(),
        keys::FUNC,
        record.caller.function(),
        keys::LINE,
        record.caller.line(),
        keys::APP_NAME,
        record.app_name,
        keys::VERSION,
        record.version,
    ))
}

fn paint(level: Level, text: &str) -> ColoredString {
    match level {
        Level::Trace => text.white(),
        Level::Debug => text.green(),
        Level::Info => text.cyan(),
        Level::Warn => text.yellow(),
        Level::Error => text.red(),
        Level::Panic => text.on_red(),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::utc_datetime;

    use super::*;
    use crate::Caller;

    fn sample_record<'a>(caller: &'a Caller, request_id: &'a str) -> Record<'a> {
        Record {
            time: utc_datetime!(2024-05-17 09:30:00),
            level: Level::Warn,
            request_id,
            message: "disk at 91%".to_owned(),
            caller,
            app_name: "svc",
            version: "1.2.0",
        }
    }

    #[test]
    fn production_line_is_valid_json_with_expected_fields() {
        let caller = Caller::new("src/main.rs", "svc::main", 42);
        let record = sample_record(&caller, "a1b2c3d4");

        let line = render_console(&record, Environment::Prod, true).expect("render");
        let value: serde_json::Value = serde_json::from_str(&line).expect("valid JSON");
        let object = value.as_object().expect("JSON object");

        assert_eq!(object.get(keys::LEVEL).and_then(|v| v.as_str()), Some("WARN"));
        assert_eq!(
            object.get(keys::MSG).and_then(|v| v.as_str()),
            Some("disk at 91%")
        );
        assert_eq!(
            object.get(keys::REQUEST_ID).and_then(|v| v.as_str()),
            Some("a1b2c3d4")
        );
        assert_eq!(object.get(keys::FILE).and_then(|v| v.as_str()), Some("main.rs"));
        assert_eq!(
            object.get(keys::FUNC).and_then(|v| v.as_str()),
            Some("svc::main")
        );
        assert_eq!(object.get(keys::LINE).and_then(|v| v.as_u64()), Some(42));
        assert_eq!(object.get(keys::APP_NAME).and_then(|v| v.as_str()), Some("svc"));
        assert_eq!(object.get(keys::VERSION).and_then(|v| v.as_str()), Some("1.2.0"));
        assert!(object.contains_key(keys::TIME));
        assert_eq!(object.len(), 9);
    }

    #[test]
    fn production_line_omits_empty_fields() {
        let caller = Caller::new("src/main.rs", "svc::main", 42);
        let mut record = sample_record(&caller, "");
        record.version = "";

        let line = render_console(&record, Environment::Prod, false).expect("render");
        let value: serde_json::Value = serde_json::from_str(&line).expect("valid JSON");
        let object = value.as_object().expect("JSON object");

        assert!(!object.contains_key(keys::REQUEST_ID));
        assert!(!object.contains_key(keys::VERSION));
        assert!(object.contains_key(keys::MSG));
    }

    #[test]
    fn production_mode_never_emits_ansi_escapes() {
        let caller = Caller::new("src/main.rs", "svc::main", 42);
        let record = sample_record(&caller, "a1b2c3d4");

        let line = render_console(&record, Environment::Prod, true).expect("render");
        assert!(!line.contains('\u{1b}'));
    }

    #[test]
    fn dev_console_without_colors_has_no_ansi_escapes_and_fixed_field_order() {
        let caller = Caller::new("src/main.rs", "svc::main", 42);
        let record = sample_record(&caller, "a1b2c3d4");

        let line = render_console(&record, Environment::Dev, false).expect("render");
        assert!(!line.contains('\u{1b}'));

        let positions: Vec<usize> = [
            "2024-05-17 09:30:00",
            "WARN",
            "a1b2c3d4",
            "disk at 91%",
            "main.rs",
            "svc::main",
            "42",
            "svc",
            "1.2.0",
        ]
        .iter()
        .map(|needle| line.find(needle).expect("field present"))
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn dev_console_with_colors_emits_ansi_escapes_even_when_piped() {
        let caller = Caller::new("src/main.rs", "svc::main", 42);
        let record = sample_record(&caller, "a1b2c3d4");

        let line = render_console(&record, Environment::Dev, true).expect("render");
        assert!(
            line.contains('\u{1b}'),
            "expected ANSI escapes in: {line}"
        );
    }

    #[test]
    fn dev_file_line_quotes_every_value() {
        let caller = Caller::new("src/main.rs", "svc::main", 42);
        let record = sample_record(&caller, "a1b2c3d4");

        let line = render_file(&record, Environment::Dev).expect("render");
        assert!(!line.contains('\u{1b}'));
        assert!(line.contains("time=\"2024-05-17 09:30:00\""));
        assert!(line.contains("level=\"WARN\""));
        assert!(line.contains("request_id=\"a1b2c3d4\""));
        assert!(line.contains("msg=\"disk at 91%\""));
        assert!(line.contains("file=\"main.rs\""));
        assert!(line.contains("func=\"svc::main\""));
        assert!(line.contains("line=\"42\""));
        assert!(line.contains("app_name=\"svc\""));
        assert!(line.contains("version=\"1.2.0\""));
    }

    #[test]
    fn file_output_in_production_mode_is_json() {
        let caller = Caller::new("src/main.rs", "svc::main", 42);
        let record = sample_record(&caller, "a1b2c3d4");

        let line = render_file(&record, Environment::Prod).expect("render");
        assert!(serde_json::from_str::<serde_json::Value>(&line).is_ok());
    }
}
