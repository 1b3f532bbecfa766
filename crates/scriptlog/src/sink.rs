//! Output sinks: standard output and the append-only log file.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

/// Writes a rendered line to standard output.
///
/// The newline is appended to the buffer first so the line reaches the
/// stream in a single `write_all` call and stays intact under concurrent
/// callers. Write errors are ignored; there is no fallback beyond stdout.
pub(crate) fn write_stdout(line: &str) {
    let mut buffer = Vec::with_capacity(line.len() + 1);
    buffer.extend_from_slice(line.as_bytes());
    buffer.push(b'\n');
    let _ = io::stdout().lock().write_all(&buffer);
}

#[derive(Debug, thiserror::Error)]
enum SinkError {
    #[error("failed to create log directory `{path}`: {source}")]
    CreateDirectory { path: PathBuf, source: io::Error },

    #[error("failed to open log file `{path}` for append: {source}")]
    OpenFile { path: PathBuf, source: io::Error },

    #[error("failed to write to log file `{path}`: {source}")]
    WriteFile { path: PathBuf, source: io::Error },
}

#[derive(Debug)]
enum SinkState {
    /// No write attempted yet; the directory and file are set up lazily.
    Pending,
    Open(File),
    /// A setup or write step failed; file output stays off for the rest of
    /// the process.
    Disabled,
}

/// The append-only file sink with one-way degradation.
///
/// The first write creates the target directory if missing and opens
/// `<app_name>.log` for append. If either step fails, the sink prints one
/// diagnostic to stdout and disables itself permanently; later calls return
/// without touching the filesystem.
#[derive(Debug)]
pub(crate) struct FileSink {
    directory: PathBuf,
    path: PathBuf,
    state: Mutex<SinkState>,
}

impl FileSink {
    pub(crate) fn new(directory: PathBuf, app_name: &str) -> Self {
        let path = directory.join(format!("{app_name}.log"));
        Self {
            directory,
            path,
            state: Mutex::new(SinkState::Pending),
        }
    }

    /// Appends one rendered line, degrading to a no-op on failure.
    pub(crate) fn write_line(&self, line: &str) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };

        if matches!(*state, SinkState::Pending) {
            match Self::open(&self.directory, &self.path) {
                Ok(file) => *state = SinkState::Open(file),
                Err(err) => {
                    diagnostic(&err);
                    *state = SinkState::Disabled;
                    return;
                }
            }
        }

        if let SinkState::Open(file) = &mut *state {
            let mut buffer = Vec::with_capacity(line.len() + 1);
            buffer.extend_from_slice(line.as_bytes());
            buffer.push(b'\n');

            if let Err(err) = file.write_all(&buffer) {
                diagnostic(&SinkError::WriteFile {
                    path: self.path.clone(),
                    source: err,
                });
                *state = SinkState::Disabled;
            }
        }
    }

    fn open(directory: &Path, path: &Path) -> Result<File, SinkError> {
        fs::create_dir_all(directory).map_err(|source| SinkError::CreateDirectory {
            path: directory.to_owned(),
            source,
        })?;

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SinkError::OpenFile {
                path: path.to_owned(),
                source,
            })
    }

    #[cfg(test)]
    fn is_disabled(&self) -> bool {
        self.state
            .lock()
            .map(|state| matches!(*state, SinkState::Disabled))
            .unwrap_or(false)
    }
}

#[allow(clippy::print_stdout)]
fn diagnostic(err: &SinkError) {
    println!(
        "[WARN] {}: {err}; continuing with console output only",
        env!("CARGO_PKG_NAME")
    );
}
