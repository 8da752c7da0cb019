//! Levelled file logger.
//!
//! Writes timestamped, severity-gated lines to a single log file and shuts
//! down deterministically. Unlike the sound deck, every I/O failure here is
//! surfaced to the caller.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::LoggerError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Verbosity tier controlling which log calls produce output.
///
/// Higher value = more verbose. A configured mode admits every tier at or
/// below its own number, with one quirk kept from the original design:
/// debug lines appear only at maximum verbosity (`mode == Debug`), never
/// through the at-or-above rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LoggingMode {
    Error = 1,
    Warning = 2,
    Info = 3,
    Debug = 4,
}

impl LoggingMode {
    /// Banner between timestamp and message, padded so the message column
    /// lines up across levels.
    fn banner(self) -> &'static str {
        match self {
            LoggingMode::Debug => "-DEBUG-",
            LoggingMode::Error => "-ERROR-",
            LoggingMode::Info => "-INFO- ",
            LoggingMode::Warning => "-WARN- ",
        }
    }

    /// Whether a message at `level` is emitted under this mode.
    fn admits(self, level: LoggingMode) -> bool {
        match level {
            // Exact match only: debug lines never piggyback on lower modes
            LoggingMode::Debug => self == LoggingMode::Debug,
            level => self >= level,
        }
    }
}

struct Inner {
    /// `None` once the logger has shut down.
    writer: Option<BufWriter<File>>,
    mode: LoggingMode,
}

/// A levelled logger writing to one exclusively-owned file.
///
/// Lines have the fixed shape `{timestamp} -{TAG}- {message}`, appended in
/// call order. The threshold check and the write happen under one lock, so
/// concurrent callers never interleave partial lines and a racing
/// [`set_mode`](Logger::set_mode) cannot slip a line through under a stale
/// threshold.
///
/// Shutdown is idempotent: the first [`shutdown`](Logger::shutdown) writes
/// the closing line, flushes and closes the file; later calls return `Ok`
/// without touching it. Dropping the logger shuts it down as a safety net,
/// but explicit shutdown is the primary path since `Drop` has to swallow
/// I/O errors.
///
/// Log calls after shutdown fail with [`LoggerError::Closed`]; a logger
/// that silently went dead would defeat its purpose.
pub struct Logger {
    path: PathBuf,
    inner: Mutex<Inner>,
}

impl Logger {
    /// Open (creating or truncating) the log file at `path`.
    ///
    /// Construction failures are distinguishable: a missing parent
    /// directory yields [`LoggerError::NotFound`], a permission problem
    /// [`LoggerError::PermissionDenied`], anything else
    /// [`LoggerError::Open`].
    pub fn new<P: AsRef<Path>>(path: P, mode: LoggingMode) -> Result<Self, LoggerError> {
        let path = path.as_ref().to_path_buf();

        let file = File::create(&path).map_err(|err| {
            let display = path.display().to_string();
            match err.kind() {
                ErrorKind::NotFound => LoggerError::NotFound { path: display },
                ErrorKind::PermissionDenied => LoggerError::PermissionDenied { path: display },
                _ => LoggerError::Open {
                    path: display,
                    source: err,
                },
            }
        })?;

        tracing::debug!("Opened log file: {}", path.display());

        Ok(Self {
            path,
            inner: Mutex::new(Inner {
                writer: Some(BufWriter::new(file)),
                mode,
            }),
        })
    }

    /// Write a debug line. Emitted only at maximum verbosity.
    pub fn debug(&self, message: &str) -> Result<(), LoggerError> {
        self.write_line(LoggingMode::Debug, message)
    }

    /// Write an info line. Emitted under `Info` and `Debug` modes.
    pub fn info(&self, message: &str) -> Result<(), LoggerError> {
        self.write_line(LoggingMode::Info, message)
    }

    /// Write a warning line. Emitted under `Warning`, `Info` and `Debug` modes.
    pub fn warning(&self, message: &str) -> Result<(), LoggerError> {
        self.write_line(LoggingMode::Warning, message)
    }

    /// Write an error line. Emitted under every mode.
    pub fn error(&self, message: &str) -> Result<(), LoggerError> {
        self.write_line(LoggingMode::Error, message)
    }

    /// Replace the verbosity threshold for all subsequent writes.
    pub fn set_mode(&self, mode: LoggingMode) {
        self.inner.lock().mode = mode;
    }

    /// The currently configured threshold
    pub fn mode(&self) -> LoggingMode {
        self.inner.lock().mode
    }

    /// The log file location, fixed at construction
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the logger still accepts writes
    pub fn is_open(&self) -> bool {
        self.inner.lock().writer.is_some()
    }

    fn write_line(&self, level: LoggingMode, message: &str) -> Result<(), LoggerError> {
        let mut inner = self.inner.lock();
        let mode = inner.mode;
        let writer = inner.writer.as_mut().ok_or(LoggerError::Closed)?;

        if !mode.admits(level) {
            return Ok(());
        }

        write_entry(writer, level, message)
    }

    /// Write the closing line, flush and close the file.
    ///
    /// Safe to call any number of times; only the first call transitions
    /// the logger to closed and later calls return `Ok(())` immediately.
    /// The closing line goes through the normal info gate, so a logger
    /// running at `Error` or `Warning` closes silently.
    pub fn shutdown(&self) -> Result<(), LoggerError> {
        let mut inner = self.inner.lock();

        // Take the writer out first so the transition happens exactly once
        // even if the closing write fails.
        let Some(mut writer) = inner.writer.take() else {
            return Ok(());
        };

        if inner.mode.admits(LoggingMode::Info) {
            write_entry(&mut writer, LoggingMode::Info, "Closing the logger.")?;
        }

        writer.flush().map_err(LoggerError::Write)?;
        tracing::debug!("Closed log file: {}", self.path.display());
        Ok(())
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Safety net for owners that forget the explicit shutdown.
        let _ = self.shutdown();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("path", &self.path)
            .field("mode", &self.mode())
            .field("open", &self.is_open())
            .finish()
    }
}

fn write_entry(
    writer: &mut BufWriter<File>,
    level: LoggingMode,
    message: &str,
) -> Result<(), LoggerError> {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT);
    writeln!(writer, "{} {} {}", timestamp, level.banner(), message)
        .map_err(LoggerError::Write)?;
    // Flush per line so a write failure surfaces on the call that caused it
    writer.flush().map_err(LoggerError::Write)
}
