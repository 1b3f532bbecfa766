//! Call-site metadata attached to every log record.

/// Source location of a log call: file basename, fully qualified function
/// path and line number.
///
/// The [`crate::caller!`] macro captures this at the call site. Code
/// that wraps the logger (and would otherwise report the wrapper as the
/// caller) can construct a `Caller` explicitly and pass it to
/// [`Logger::log`][crate::Logger::log] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    file: String,
    function: String,
    line: u32,
}

impl Caller {
    /// Creates caller metadata from a source path, function path and line.
    ///
    /// Only the basename of `file` is kept.
    pub fn new(file: &str, function: &str, line: u32) -> Self {
        let basename = file.rsplit(['/', '\\']).next().unwrap_or(file);
        Self {
            file: basename.to_owned(),
            function: function.to_owned(),
            line,
        }
    }

    /// Placeholder metadata for when the call site cannot be resolved.
    pub fn unknown() -> Self {
        Self {
            file: "?".to_owned(),
            function: "runtimeInfo".to_owned(),
            line: 0,
        }
    }

    /// Whether this is the [`Caller::unknown`] placeholder.
    pub fn is_unknown(&self) -> bool {
        self.file == "?" && self.function == "runtimeInfo" && self.line == 0
    }

    /// The source file basename.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The fully qualified function path.
    pub fn function(&self) -> &str {
        &self.function
    }

    /// The line number, or 0 when unresolved.
    pub fn line(&self) -> u32 {
        self.line
    }
}

/// Resolves the fully qualified path of the function enclosing a marker item.
///
/// Support function for the [`crate::caller!`] macro; not intended to
/// be called directly.
#[doc(hidden)]
pub fn __function_path<T>(_: T) -> &'static str {
    let name = std::any::type_name::<T>();
    name.strip_suffix("::f").unwrap_or(name)
}

/// Captures a [`Caller`] describing the enclosing function and line.
///
/// # Example
///
/// ```
/// let here = scriptlog::caller!();
/// assert!(here.line() > 0);
/// ```
#[macro_export]
macro_rules! caller {
    () => {{
        fn f() {}
        $crate::Caller::new(
            ::core::file!(),
            $crate::__function_path(f),
            ::core::line!(),
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_file_basename_and_function_path() {
        let caller = crate::caller!();
        assert_eq!(caller.file(), "caller.rs");
        assert!(
            caller
                .function()
                .contains("captures_file_basename_and_function_path"),
            "unexpected function path: {}",
            caller.function()
        );
        assert!(caller.line() > 0);
    }

    #[test]
    fn new_keeps_only_the_basename() {
        let caller = Caller::new("/src/bin/main.rs", "app::main", 12);
        assert_eq!(caller.file(), "main.rs");
        assert_eq!(caller.function(), "app::main");
        assert_eq!(caller.line(), 12);
    }

    #[test]
    fn unknown_uses_placeholder_values() {
        let caller = Caller::unknown();
        assert_eq!(caller.file(), "?");
        assert_eq!(caller.function(), "runtimeInfo");
        assert_eq!(caller.line(), 0);
        assert!(caller.is_unknown());
    }

    #[test]
    fn resolved_callers_are_not_flagged_as_unknown() {
        assert!(!crate::caller!().is_unknown());
        assert!(!Caller::new("main.rs", "app::main", 7).is_unknown());
    }
}
