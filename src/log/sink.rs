// SPDX-License-Identifier: PMPL-1.0-or-later

//! Output destinations for formatted records.

use super::formatter::strip_ansi;
use super::level::Severity;
use crate::error::ConfigError;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// Receives fully formatted (possibly multi-line) records.
pub trait LogSink: Send + Sync {
    fn write(&self, severity: Severity, rendered: &str);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Which standard stream each record goes to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    /// Debug and info to stdout, the rest to stderr.
    #[default]
    Split,
    /// Everything to stderr, leaving stdout for command output.
    Stderr,
}

/// Standard streams, routed by [`ConsoleStream`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink {
    stream: ConsoleStream,
}

impl ConsoleSink {
    pub fn new(stream: ConsoleStream) -> Self {
        Self { stream }
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }

    fn uses_stderr(&self, severity: Severity) -> bool {
        self.stream == ConsoleStream::Stderr || severity.is_diagnostic()
    }
}

/// Write one record, dropping I/O failures (closed pipe, full disk).
fn write_record(mut out: impl Write, rendered: &str) {
    let _ = writeln!(out, "{}", rendered).and_then(|_| out.flush());
}

impl LogSink for ConsoleSink {
    fn write(&self, severity: Severity, rendered: &str) {
        if self.uses_stderr(severity) {
            write_record(io::stderr().lock(), rendered);
        } else {
            write_record(io::stdout().lock(), rendered);
        }
    }
}

/// Appends plain-text copies of records to a file.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Open `path` for appending, creating parent directories as needed.
    pub fn open(path: &Path) -> Result<Self, ConfigError> {
        let to_error = |source| ConfigError::LogFile {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(to_error)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(to_error)?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    fn write(&self, _severity: Severity, rendered: &str) {
        let mut file = lock(&self.file);
        write_record(&mut *file, &strip_ansi(rendered));
    }
}

/// A record kept by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub severity: Severity,
    /// Record text with escape sequences removed.
    pub text: String,
}

/// In-process capture, shared between clones.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<CapturedRecord> {
        lock(&self.records).clone()
    }

    /// True if any captured record contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        lock(&self.records)
            .iter()
            .any(|record| record.text.contains(needle))
    }

    pub fn clear(&self) {
        lock(&self.records).clear();
    }
}

impl LogSink for MemorySink {
    fn write(&self, severity: Severity, rendered: &str) {
        lock(&self.records).push(CapturedRecord {
            severity,
            text: strip_ansi(rendered).into_owned(),
        });
    }
}
